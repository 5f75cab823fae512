//! Global symbols of the Solidity language.
//!
//! Symbols with identifiers `-1` to `-99` are codified by the compiler
//! and referenced by `Identifier` nodes. The remaining identifiers are
//! assigned here so member symbols (`msg.sender`, `array.push`, ...) are
//! addressable too; those are only ever referenced by `MemberAccess`
//! nodes. The numeric values are a wire format shared with the compiler
//! and must not change.

/// Closed enumeration of names built into the language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(i64)]
pub enum GlobalSymbol {
    Abi = -1,
    Addmod = -2,
    Assert = -3,
    Block = -4,
    Blockhash = -5,
    Ecrecover = -6,
    Gasleft = -7,
    Keccak256 = -8,
    Msg = -15,
    Mulmod = -16,
    Now = -17,
    Require = -18,
    Revert = -19,
    Ripemd160 = -20,
    Selfdestruct = -21,
    Sha256 = -22,
    Sha3 = -23,
    Suicide = -24,
    Super = -25,
    Tx = -26,
    Type = -27,
    This = -28,

    BlockBasefee = -100,
    BlockChainid = -101,
    BlockCoinbase = -102,
    BlockDifficulty = -103,
    BlockGaslimit = -104,
    BlockNumber = -105,
    BlockTimestamp = -106,
    BlockPrevrandao = -107,
    BlockBlobbasefee = -108,

    MsgData = -200,
    MsgSender = -201,
    MsgSig = -202,
    MsgValue = -203,

    TxGasprice = -300,
    TxOrigin = -301,

    AbiDecode = -400,
    AbiEncode = -401,
    AbiEncodePacked = -402,
    AbiEncodeWithSelector = -403,
    AbiEncodeWithSignature = -404,
    AbiEncodeCall = -405,

    BytesConcat = -500,
    BytesLength = -501,
    BytesPush = -502,

    StringConcat = -600,

    AddressBalance = -700,
    AddressCode = -701,
    AddressCodehash = -702,
    AddressTransfer = -703,
    AddressSend = -704,
    AddressCall = -705,
    AddressDelegatecall = -706,
    AddressStaticcall = -707,

    /// Available for contracts and interfaces.
    TypeName = -800,
    TypeCreationCode = -801,
    TypeRuntimeCode = -802,
    /// Available for interfaces only.
    TypeInterfaceId = -803,
    /// Available for integer types.
    TypeMin = -804,
    TypeMax = -805,

    ArrayLength = -900,
    ArrayPush = -901,
    ArrayPop = -902,

    FunctionSelector = -1000,
    FunctionValue = -1001,
    FunctionGas = -1002,
    FunctionAddress = -1003,

    UserDefinedValueTypeWrap = -1100,
    UserDefinedValueTypeUnwrap = -1101,
}

impl GlobalSymbol {
    /// Maps a compiler-assigned (or member-symbol) negative id back to the
    /// symbol. Returns `None` for ids outside the closed enumeration.
    pub fn from_id(id: i64) -> Option<Self> {
        use GlobalSymbol::*;
        Some(match id {
            -1 => Abi,
            -2 => Addmod,
            -3 => Assert,
            -4 => Block,
            -5 => Blockhash,
            -6 => Ecrecover,
            -7 => Gasleft,
            -8 => Keccak256,
            -15 => Msg,
            -16 => Mulmod,
            -17 => Now,
            -18 => Require,
            -19 => Revert,
            -20 => Ripemd160,
            -21 => Selfdestruct,
            -22 => Sha256,
            -23 => Sha3,
            -24 => Suicide,
            -25 => Super,
            -26 => Tx,
            -27 => Type,
            -28 => This,
            -100 => BlockBasefee,
            -101 => BlockChainid,
            -102 => BlockCoinbase,
            -103 => BlockDifficulty,
            -104 => BlockGaslimit,
            -105 => BlockNumber,
            -106 => BlockTimestamp,
            -107 => BlockPrevrandao,
            -108 => BlockBlobbasefee,
            -200 => MsgData,
            -201 => MsgSender,
            -202 => MsgSig,
            -203 => MsgValue,
            -300 => TxGasprice,
            -301 => TxOrigin,
            -400 => AbiDecode,
            -401 => AbiEncode,
            -402 => AbiEncodePacked,
            -403 => AbiEncodeWithSelector,
            -404 => AbiEncodeWithSignature,
            -405 => AbiEncodeCall,
            -500 => BytesConcat,
            -501 => BytesLength,
            -502 => BytesPush,
            -600 => StringConcat,
            -700 => AddressBalance,
            -701 => AddressCode,
            -702 => AddressCodehash,
            -703 => AddressTransfer,
            -704 => AddressSend,
            -705 => AddressCall,
            -706 => AddressDelegatecall,
            -707 => AddressStaticcall,
            -800 => TypeName,
            -801 => TypeCreationCode,
            -802 => TypeRuntimeCode,
            -803 => TypeInterfaceId,
            -804 => TypeMin,
            -805 => TypeMax,
            -900 => ArrayLength,
            -901 => ArrayPush,
            -902 => ArrayPop,
            -1000 => FunctionSelector,
            -1001 => FunctionValue,
            -1002 => FunctionGas,
            -1003 => FunctionAddress,
            -1100 => UserDefinedValueTypeWrap,
            -1101 => UserDefinedValueTypeUnwrap,
            _ => return None,
        })
    }

    /// The stable integer identifier of the symbol.
    pub fn id(self) -> i64 {
        self as i64
    }

    /// Display name as it appears in source code, dots included for
    /// member symbols.
    pub fn name(self) -> &'static str {
        use GlobalSymbol::*;
        match self {
            Abi => "abi",
            Addmod => "addmod",
            Assert => "assert",
            Block => "block",
            Blockhash => "blockhash",
            Ecrecover => "ecrecover",
            Gasleft => "gasleft",
            Keccak256 => "keccak256",
            Msg => "msg",
            Mulmod => "mulmod",
            Now => "now",
            Require => "require",
            Revert => "revert",
            Ripemd160 => "ripemd160",
            Selfdestruct => "selfdestruct",
            Sha256 => "sha256",
            Sha3 => "sha3",
            Suicide => "suicide",
            Super => "super",
            Tx => "tx",
            Type => "type",
            This => "this",
            BlockBasefee => "block.basefee",
            BlockChainid => "block.chainid",
            BlockCoinbase => "block.coinbase",
            BlockDifficulty => "block.difficulty",
            BlockGaslimit => "block.gaslimit",
            BlockNumber => "block.number",
            BlockTimestamp => "block.timestamp",
            BlockPrevrandao => "block.prevrandao",
            BlockBlobbasefee => "block.blobbasefee",
            MsgData => "msg.data",
            MsgSender => "msg.sender",
            MsgSig => "msg.sig",
            MsgValue => "msg.value",
            TxGasprice => "tx.gasprice",
            TxOrigin => "tx.origin",
            AbiDecode => "abi.decode",
            AbiEncode => "abi.encode",
            AbiEncodePacked => "abi.encodePacked",
            AbiEncodeWithSelector => "abi.encodeWithSelector",
            AbiEncodeWithSignature => "abi.encodeWithSignature",
            AbiEncodeCall => "abi.encodeCall",
            BytesConcat => "bytes.concat",
            BytesLength => "bytes.length",
            BytesPush => "bytes.push",
            StringConcat => "string.concat",
            AddressBalance => "address.balance",
            AddressCode => "address.code",
            AddressCodehash => "address.codehash",
            AddressTransfer => "address.transfer",
            AddressSend => "address.send",
            AddressCall => "address.call",
            AddressDelegatecall => "address.delegatecall",
            AddressStaticcall => "address.staticcall",
            TypeName => "type().name",
            TypeCreationCode => "type().creationCode",
            TypeRuntimeCode => "type().runtimeCode",
            TypeInterfaceId => "type().interfaceId",
            TypeMin => "type().min",
            TypeMax => "type().max",
            ArrayLength => "array.length",
            ArrayPush => "array.push",
            ArrayPop => "array.pop",
            FunctionSelector => "function.selector",
            FunctionValue => "function.value",
            FunctionGas => "function.gas",
            FunctionAddress => "function.address",
            UserDefinedValueTypeWrap => "wrap",
            UserDefinedValueTypeUnwrap => "unwrap",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::GlobalSymbol;

    #[test]
    fn ids_round_trip() {
        for id in [-1, -28, -106, -201, -405, -707, -805, -902, -1101] {
            let symbol = GlobalSymbol::from_id(id).unwrap();
            assert_eq!(symbol.id(), id);
        }
        assert_eq!(GlobalSymbol::from_id(-9999), None);
        assert_eq!(GlobalSymbol::from_id(5), None);
    }

    #[test]
    fn compiler_codified_range() {
        assert_eq!(GlobalSymbol::from_id(-18), Some(GlobalSymbol::Require));
        assert_eq!(GlobalSymbol::Require.name(), "require");
        assert_eq!(GlobalSymbol::MsgSender.name(), "msg.sender");
    }
}
