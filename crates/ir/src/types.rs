//! Parser for the compiler's `typeIdentifier` mini-language.
//!
//! Every expression carries a compact recursive type encoding such as
//! `t_mapping$_t_address_$_t_uint256_$`. A small recursive-descent parser
//! turns it into a [`SolType`] tree. The parser must consume its whole
//! input; a remainder means the grammar fell out of sync with the
//! compiler, which is a bug worth failing loudly on.

use ast::AstNodeId;

/// Sequential reader over a type identifier string.
pub struct StringReader<'a> {
    original: &'a str,
    rest: &'a str,
}

impl<'a> StringReader<'a> {
    pub fn new(original: &'a str) -> Self {
        StringReader {
            original,
            rest: original,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.rest.is_empty()
    }

    pub fn rest(&self) -> &'a str {
        self.rest
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.rest.starts_with(prefix)
    }

    /// Consumes `prefix` if present, reporting whether it did.
    pub fn try_read(&mut self, prefix: &str) -> bool {
        if let Some(stripped) = self.rest.strip_prefix(prefix) {
            self.rest = stripped;
            true
        } else {
            false
        }
    }

    /// Consumes `prefix` or panics naming the full original input.
    pub fn read(&mut self, prefix: &str) {
        assert!(
            self.try_read(prefix),
            "type identifier does not continue with {prefix:?}: {:?} (in {:?})",
            self.rest,
            self.original
        );
    }

    /// Consumes and returns the longest prefix of bytes satisfying `pred`.
    pub fn take_while(&mut self, pred: impl Fn(char) -> bool) -> &'a str {
        let end = self
            .rest
            .char_indices()
            .find(|&(_, c)| !pred(c))
            .map(|(i, _)| i)
            .unwrap_or(self.rest.len());
        let (taken, rest) = self.rest.split_at(end);
        self.rest = rest;
        taken
    }

    /// Consumes a non-empty decimal number.
    pub fn read_number(&mut self) -> u64 {
        let digits = self.take_while(|c| c.is_ascii_digit());
        assert!(
            !digits.is_empty(),
            "expected a number in type identifier {:?} at {:?}",
            self.original,
            self.rest
        );
        digits.parse().expect("number out of range")
    }
}

/// Data location component of reference types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LocationSpec {
    pub location: ast::DataLocation,
    pub is_pointer: bool,
    pub is_slice: bool,
}

/// Kind component of a function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FunctionTypeKind {
    Declaration,
    Internal,
    External,
    DelegateCall,
    BareCall,
    BareCallCode,
    BareDelegateCall,
    BareStaticCall,
    Creation,
    Send,
    Transfer,
    Keccak256,
    Selfdestruct,
    Revert,
    EcRecover,
    Sha256,
    Ripemd160,
    Log0,
    Log1,
    Log2,
    Log3,
    Log4,
    GasLeft,
    Event,
    Error,
    Wrap,
    Unwrap,
    SetGas,
    SetValue,
    BlockHash,
    AddMod,
    MulMod,
    ArrayPush,
    ArrayPop,
    ByteArrayPush,
    BytesConcat,
    StringConcat,
    ObjectCreation,
    Assert,
    Require,
    AbiEncode,
    AbiEncodePacked,
    AbiEncodeWithSelector,
    AbiEncodeCall,
    AbiEncodeWithSignature,
    AbiDecode,
    MetaType,
}

/// Kind component of a magic type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MagicTypeKind {
    Block,
    Message,
    Transaction,
    Abi,
    MetaType,
}

/// Parsed representation of a type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolType {
    Address {
        payable: bool,
    },
    Bool,
    Int {
        bits: u16,
    },
    UInt {
        bits: u16,
    },
    Fixed {
        total_bits: u16,
        fractional_digits: u16,
    },
    UFixed {
        total_bits: u16,
        fractional_digits: u16,
    },
    StringType {
        location: Option<LocationSpec>,
    },
    Bytes {
        location: Option<LocationSpec>,
    },
    FixedBytes {
        bytes: u8,
    },
    Function {
        kind: FunctionTypeKind,
        state_mutability: Option<ast::StateMutability>,
        parameters: Vec<SolType>,
        return_parameters: Vec<SolType>,
        gas_set: bool,
        value_set: bool,
        salt_set: bool,
        /// Type the function is attached to via `using for`, if any.
        attached_to: Option<Vec<SolType>>,
    },
    Mapping {
        key: Box<SolType>,
        value: Box<SolType>,
    },
    Struct {
        name: String,
        ast_id: AstNodeId,
        location: Option<LocationSpec>,
    },
    Enum {
        name: String,
        ast_id: AstNodeId,
    },
    Contract {
        name: String,
        ast_id: AstNodeId,
        is_super: bool,
    },
    UserDefinedValueType {
        name: String,
        ast_id: AstNodeId,
    },
    Array {
        base: Box<SolType>,
        /// `None` for dynamically sized arrays.
        length: Option<u64>,
        location: Option<LocationSpec>,
    },
    Tuple {
        /// `None` slots for omitted components.
        components: Vec<Option<SolType>>,
    },
    /// `type(T)` — the type of a type expression.
    TypeType {
        actual: Box<SolType>,
    },
    Magic {
        kind: MagicTypeKind,
        /// The argument type of `type(T)` magic types.
        meta: Option<Box<SolType>>,
    },
    Module {
        source_unit_id: i64,
    },
    Rational {
        negative: bool,
        numerator: String,
        denominator: String,
    },
    StringLiteral {
        /// Keccak-256 of the literal value, hex-encoded.
        value_hash: String,
    },
    Modifier {
        parameters: Vec<SolType>,
    },
}

/// Parses a full type identifier, panicking on trailing input.
pub fn parse_type_identifier(identifier: &str) -> SolType {
    let mut reader = StringReader::new(identifier);
    let parsed = parse_type(&mut reader);
    assert!(
        reader.is_empty(),
        "type identifier not fully consumed: {:?} left of {identifier:?}",
        reader.rest()
    );
    parsed
}

fn parse_type(reader: &mut StringReader<'_>) -> SolType {
    reader.read("t_");

    if reader.try_read("address") {
        let payable = reader.try_read("_payable");
        SolType::Address { payable }
    } else if reader.try_read("bool") {
        SolType::Bool
    } else if reader.try_read("stringliteral_") {
        let value_hash = reader.take_while(|c| c.is_ascii_hexdigit()).to_string();
        SolType::StringLiteral { value_hash }
    } else if reader.try_read("string") {
        SolType::StringType {
            location: parse_location(reader),
        }
    } else if reader.try_read("uint") {
        SolType::UInt {
            bits: reader.read_number() as u16,
        }
    } else if reader.try_read("int") {
        SolType::Int {
            bits: reader.read_number() as u16,
        }
    } else if reader.try_read("ufixed") {
        let total_bits = reader.read_number() as u16;
        reader.read("x");
        let fractional_digits = reader.read_number() as u16;
        SolType::UFixed {
            total_bits,
            fractional_digits,
        }
    } else if reader.try_read("fixed") {
        let total_bits = reader.read_number() as u16;
        reader.read("x");
        let fractional_digits = reader.read_number() as u16;
        SolType::Fixed {
            total_bits,
            fractional_digits,
        }
    } else if reader.try_read("bytes") {
        if reader.rest().starts_with(|c: char| c.is_ascii_digit()) {
            SolType::FixedBytes {
                bytes: reader.read_number() as u8,
            }
        } else {
            SolType::Bytes {
                location: parse_location(reader),
            }
        }
    } else if reader.try_read("byte") {
        // The pre-0.8 `byte` alias for `bytes1`.
        SolType::FixedBytes { bytes: 1 }
    } else if reader.try_read("function_") {
        parse_function(reader)
    } else if reader.try_read("mapping") {
        reader.read("$_");
        let key = parse_type(reader);
        reader.read("_$_");
        let value = parse_type(reader);
        reader.read("_$");
        SolType::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    } else if reader.try_read("struct") {
        let (name, ast_id) = parse_named_reference(reader);
        SolType::Struct {
            name,
            ast_id,
            location: parse_location(reader),
        }
    } else if reader.try_read("enum") {
        let (name, ast_id) = parse_named_reference(reader);
        SolType::Enum { name, ast_id }
    } else if reader.try_read("contract") {
        let (name, ast_id) = parse_named_reference(reader);
        SolType::Contract {
            name,
            ast_id,
            is_super: false,
        }
    } else if reader.try_read("super") {
        let (name, ast_id) = parse_named_reference(reader);
        SolType::Contract {
            name,
            ast_id,
            is_super: true,
        }
    } else if reader.try_read("userDefinedValueType") {
        let (name, ast_id) = parse_named_reference(reader);
        SolType::UserDefinedValueType { name, ast_id }
    } else if reader.try_read("array") {
        reader.read("$_");
        let base = parse_type(reader);
        reader.read("_$");
        let length = if reader.try_read("dyn") {
            None
        } else {
            Some(reader.read_number())
        };
        SolType::Array {
            base: Box::new(base),
            length,
            location: parse_location(reader),
        }
    } else if reader.try_read("tuple") {
        SolType::Tuple {
            components: parse_list(reader),
        }
    } else if reader.try_read("type") {
        reader.read("$_");
        let actual = parse_type(reader);
        reader.read("_$");
        SolType::TypeType {
            actual: Box::new(actual),
        }
    } else if reader.try_read("magic_meta_type_") {
        let meta = parse_type(reader);
        SolType::Magic {
            kind: MagicTypeKind::MetaType,
            meta: Some(Box::new(meta)),
        }
    } else if reader.try_read("magic_block") {
        SolType::Magic {
            kind: MagicTypeKind::Block,
            meta: None,
        }
    } else if reader.try_read("magic_message") {
        SolType::Magic {
            kind: MagicTypeKind::Message,
            meta: None,
        }
    } else if reader.try_read("magic_transaction") {
        SolType::Magic {
            kind: MagicTypeKind::Transaction,
            meta: None,
        }
    } else if reader.try_read("magic_abi") {
        SolType::Magic {
            kind: MagicTypeKind::Abi,
            meta: None,
        }
    } else if reader.try_read("module_") {
        SolType::Module {
            source_unit_id: reader.read_number() as i64,
        }
    } else if reader.try_read("rational_") {
        let negative = reader.try_read("minus_");
        let numerator = reader.take_while(|c| c.is_ascii_digit()).to_string();
        reader.read("_by_");
        let denominator = reader.take_while(|c| c.is_ascii_digit()).to_string();
        SolType::Rational {
            negative,
            numerator,
            denominator,
        }
    } else if reader.try_read("modifier") {
        SolType::Modifier {
            parameters: parse_list(reader).into_iter().flatten().collect(),
        }
    } else {
        panic!(
            "unknown type identifier head at {:?} (in {:?})",
            reader.rest(),
            reader.original
        );
    }
}

/// `$_Name_$<id>` with `$$$` unescaping to a literal `$` in the name.
fn parse_named_reference(reader: &mut StringReader<'_>) -> (String, AstNodeId) {
    reader.read("$_");
    let mut name = String::new();
    loop {
        if reader.try_read("$$$") {
            name.push('$');
        } else if reader.starts_with("_$")
            && reader.rest()[2..].starts_with(|c: char| c.is_ascii_digit())
        {
            reader.read("_$");
            break;
        } else {
            let mut chars = reader.rest().chars();
            let c = chars
                .next()
                .unwrap_or_else(|| panic!("unterminated name in {:?}", reader.original));
            name.push(c);
            reader.rest = chars.as_str();
        }
    }
    let ast_id = reader.read_number() as AstNodeId;
    (name, ast_id)
}

/// `$_T1_$_T2_$` with empty slots allowed, `$__$` when the list is empty.
fn parse_list(reader: &mut StringReader<'_>) -> Vec<Option<SolType>> {
    reader.read("$_");
    let mut items = Vec::new();
    // An empty list closes immediately; `_$` followed by `_` is an empty
    // first slot instead.
    if reader.starts_with("_$") && !reader.rest()[2..].starts_with('_') {
        reader.read("_$");
        return items;
    }
    loop {
        if reader.starts_with("t_") {
            items.push(Some(parse_type(reader)));
        } else {
            items.push(None);
        }
        if reader.try_read("_$_") {
            continue;
        }
        reader.read("_$");
        break;
    }
    items
}

fn parse_location(reader: &mut StringReader<'_>) -> Option<LocationSpec> {
    let location = if reader.try_read("_memory") {
        ast::DataLocation::Memory
    } else if reader.try_read("_storage") {
        ast::DataLocation::Storage
    } else if reader.try_read("_calldata") {
        ast::DataLocation::Calldata
    } else if reader.try_read("_transient") {
        ast::DataLocation::Transient
    } else {
        return None;
    };
    let is_pointer = reader.try_read("_ptr");
    let is_slice = reader.try_read("_slice");
    Some(LocationSpec {
        location,
        is_pointer,
        is_slice,
    })
}

fn parse_function(reader: &mut StringReader<'_>) -> SolType {
    let head = reader.take_while(|c| c != '$');
    let (kind_token, mutability_token) = match head.split_once('_') {
        Some((kind, mutability)) => (kind, Some(mutability)),
        None => (head, None),
    };
    let kind = function_kind(kind_token)
        .unwrap_or_else(|| panic!("unknown function type kind {kind_token:?}"));
    let state_mutability = mutability_token.map(|token| match token {
        "pure" => ast::StateMutability::Pure,
        "view" => ast::StateMutability::View,
        "nonpayable" => ast::StateMutability::Nonpayable,
        "payable" => ast::StateMutability::Payable,
        other => panic!("unknown function state mutability {other:?}"),
    });

    let parameters = parse_list(reader).into_iter().flatten().collect();
    reader.read("returns");
    let return_parameters = parse_list(reader).into_iter().flatten().collect();

    let gas_set = reader.try_read("gas");
    let value_set = reader.try_read("value");
    let salt_set = reader.try_read("salt");

    let attached_to = if reader.try_read("attached_to") || reader.try_read("bound_to") {
        Some(parse_list(reader).into_iter().flatten().collect())
    } else {
        None
    };

    SolType::Function {
        kind,
        state_mutability,
        parameters,
        return_parameters,
        gas_set,
        value_set,
        salt_set,
        attached_to,
    }
}

fn function_kind(token: &str) -> Option<FunctionTypeKind> {
    use FunctionTypeKind::*;
    Some(match token {
        "declaration" => Declaration,
        "internal" => Internal,
        "external" => External,
        "delegatecall" => DelegateCall,
        "barecall" => BareCall,
        "barecallcode" => BareCallCode,
        "baredelegatecall" => BareDelegateCall,
        "barestaticcall" => BareStaticCall,
        "creation" => Creation,
        "send" => Send,
        "transfer" => Transfer,
        "keccak256" => Keccak256,
        "selfdestruct" => Selfdestruct,
        "revert" => Revert,
        "ecrecover" => EcRecover,
        "sha256" => Sha256,
        "ripemd160" => Ripemd160,
        "log0" => Log0,
        "log1" => Log1,
        "log2" => Log2,
        "log3" => Log3,
        "log4" => Log4,
        "gasleft" => GasLeft,
        "event" => Event,
        "error" => Error,
        "wrap" => Wrap,
        "unwrap" => Unwrap,
        "setgas" => SetGas,
        "setvalue" => SetValue,
        "blockhash" => BlockHash,
        "addmod" => AddMod,
        "mulmod" => MulMod,
        "arraypush" => ArrayPush,
        "arraypop" => ArrayPop,
        "bytearraypush" => ByteArrayPush,
        "bytesconcat" => BytesConcat,
        "stringconcat" => StringConcat,
        "objectcreation" => ObjectCreation,
        "assert" => Assert,
        "require" => Require,
        "abiencode" => AbiEncode,
        "abiencodepacked" => AbiEncodePacked,
        "abiencodewithselector" => AbiEncodeWithSelector,
        "abiencodecall" => AbiEncodeCall,
        "abiencodewithsignature" => AbiEncodeWithSignature,
        "abidecode" => AbiDecode,
        "metatype" => MetaType,
        _ => return None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_elementary_types() {
        assert_eq!(
            parse_type_identifier("t_address"),
            SolType::Address { payable: false }
        );
        assert_eq!(
            parse_type_identifier("t_address_payable"),
            SolType::Address { payable: true }
        );
        assert_eq!(parse_type_identifier("t_bool"), SolType::Bool);
        assert_eq!(parse_type_identifier("t_uint256"), SolType::UInt { bits: 256 });
        assert_eq!(parse_type_identifier("t_int8"), SolType::Int { bits: 8 });
        assert_eq!(
            parse_type_identifier("t_bytes32"),
            SolType::FixedBytes { bytes: 32 }
        );
        assert_eq!(
            parse_type_identifier("t_ufixed128x18"),
            SolType::UFixed {
                total_bits: 128,
                fractional_digits: 18
            }
        );
    }

    #[test]
    fn parses_reference_types_with_location() {
        match parse_type_identifier("t_string_memory_ptr") {
            SolType::StringType {
                location: Some(spec),
            } => {
                assert_eq!(spec.location, ast::DataLocation::Memory);
                assert!(spec.is_pointer);
                assert!(!spec.is_slice);
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse_type_identifier("t_bytes_storage") {
            SolType::Bytes {
                location: Some(spec),
            } => {
                assert_eq!(spec.location, ast::DataLocation::Storage);
                assert!(!spec.is_pointer);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_mapping() {
        assert_eq!(
            parse_type_identifier("t_mapping$_t_address_$_t_uint256_$"),
            SolType::Mapping {
                key: Box::new(SolType::Address { payable: false }),
                value: Box::new(SolType::UInt { bits: 256 }),
            }
        );
    }

    #[test]
    fn parses_nested_mapping() {
        let parsed =
            parse_type_identifier("t_mapping$_t_address_$_t_mapping$_t_uint8_$_t_bool_$_$");
        match parsed {
            SolType::Mapping { value, .. } => match *value {
                SolType::Mapping { key, value } => {
                    assert_eq!(*key, SolType::UInt { bits: 8 });
                    assert_eq!(*value, SolType::Bool);
                }
                other => panic!("unexpected {other:?}"),
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_arrays() {
        match parse_type_identifier("t_array$_t_uint256_$dyn_storage_ptr") {
            SolType::Array {
                base,
                length: None,
                location: Some(spec),
            } => {
                assert_eq!(*base, SolType::UInt { bits: 256 });
                assert_eq!(spec.location, ast::DataLocation::Storage);
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse_type_identifier("t_array$_t_bool_$5_memory_ptr") {
            SolType::Array {
                length: Some(5), ..
            } => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_declared_types() {
        match parse_type_identifier("t_struct$_Pos_$12_storage_ptr") {
            SolType::Struct { name, ast_id, .. } => {
                assert_eq!(name, "Pos");
                assert_eq!(ast_id, 12);
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse_type_identifier("t_enum$_Dir_$7") {
            SolType::Enum { name, ast_id } => {
                assert_eq!(name, "Dir");
                assert_eq!(ast_id, 7);
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse_type_identifier("t_contract$_Vault_$44") {
            SolType::Contract {
                name,
                ast_id,
                is_super: false,
            } => {
                assert_eq!(name, "Vault");
                assert_eq!(ast_id, 44);
            }
            other => panic!("unexpected {other:?}"),
        }
        match parse_type_identifier("t_super$_Vault_$44") {
            SolType::Contract { is_super: true, .. } => {}
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn unescapes_dollar_in_names() {
        match parse_type_identifier("t_struct$_A$$$B_$3_memory_ptr") {
            SolType::Struct { name, ast_id, .. } => {
                assert_eq!(name, "A$B");
                assert_eq!(ast_id, 3);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_functions() {
        match parse_type_identifier("t_function_internal_pure$__$returns$__$") {
            SolType::Function {
                kind: FunctionTypeKind::Internal,
                state_mutability: Some(ast::StateMutability::Pure),
                parameters,
                return_parameters,
                ..
            } => {
                assert!(parameters.is_empty());
                assert!(return_parameters.is_empty());
            }
            other => panic!("unexpected {other:?}"),
        }

        match parse_type_identifier(
            "t_function_keccak256_pure$_t_bytes_memory_ptr_$returns$_t_bytes32_$",
        ) {
            SolType::Function {
                kind: FunctionTypeKind::Keccak256,
                parameters,
                return_parameters,
                ..
            } => {
                assert_eq!(parameters.len(), 1);
                assert_eq!(return_parameters, vec![SolType::FixedBytes { bytes: 32 }]);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_function_with_options_and_attachment() {
        match parse_type_identifier(
            "t_function_external_payable$__$returns$__$gasvalue",
        ) {
            SolType::Function {
                gas_set: true,
                value_set: true,
                salt_set: false,
                ..
            } => {}
            other => panic!("unexpected {other:?}"),
        }

        match parse_type_identifier(
            "t_function_internal_pure$_t_uint256_$returns$_t_uint256_$attached_to$_t_uint256_$",
        ) {
            SolType::Function {
                attached_to: Some(attached),
                ..
            } => assert_eq!(attached, vec![SolType::UInt { bits: 256 }]),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_tuples_with_empty_slots() {
        assert_eq!(
            parse_type_identifier("t_tuple$__$"),
            SolType::Tuple { components: vec![] }
        );
        assert_eq!(
            parse_type_identifier("t_tuple$_t_uint256_$_t_bool_$"),
            SolType::Tuple {
                components: vec![
                    Some(SolType::UInt { bits: 256 }),
                    Some(SolType::Bool)
                ]
            }
        );
        assert_eq!(
            parse_type_identifier("t_tuple$__$_t_uint256_$"),
            SolType::Tuple {
                components: vec![None, Some(SolType::UInt { bits: 256 })]
            }
        );
    }

    #[test]
    fn parses_magic_and_meta_types() {
        assert_eq!(
            parse_type_identifier("t_magic_block"),
            SolType::Magic {
                kind: MagicTypeKind::Block,
                meta: None
            }
        );
        match parse_type_identifier("t_magic_meta_type_t_contract$_C_$2") {
            SolType::Magic {
                kind: MagicTypeKind::MetaType,
                meta: Some(meta),
            } => match *meta {
                SolType::Contract { ref name, .. } => assert_eq!(name, "C"),
                ref other => panic!("unexpected {other:?}"),
            },
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_type_type() {
        match parse_type_identifier("t_type$_t_uint256_$") {
            SolType::TypeType { actual } => assert_eq!(*actual, SolType::UInt { bits: 256 }),
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_rational_and_literals() {
        assert_eq!(
            parse_type_identifier("t_rational_5_by_1"),
            SolType::Rational {
                negative: false,
                numerator: "5".into(),
                denominator: "1".into()
            }
        );
        assert_eq!(
            parse_type_identifier("t_rational_minus_1_by_2"),
            SolType::Rational {
                negative: true,
                numerator: "1".into(),
                denominator: "2".into()
            }
        );
        match parse_type_identifier(
            "t_stringliteral_c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470",
        ) {
            SolType::StringLiteral { value_hash } => {
                assert_eq!(value_hash.len(), 64);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    fn parses_module_and_udvt() {
        assert_eq!(
            parse_type_identifier("t_module_5"),
            SolType::Module { source_unit_id: 5 }
        );
        match parse_type_identifier("t_userDefinedValueType$_Price_$9") {
            SolType::UserDefinedValueType { name, ast_id } => {
                assert_eq!(name, "Price");
                assert_eq!(ast_id, 9);
            }
            other => panic!("unexpected {other:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "not fully consumed")]
    fn trailing_input_panics() {
        parse_type_identifier("t_boolgarbage");
    }
}
