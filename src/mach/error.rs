use super::Address;

#[derive(Clone, PartialEq)]
pub struct Error {
    code: ErrorCode,
    address: Option<Address>,
    message: &'static str,
}

#[doc(hidden)]
#[macro_export]
macro_rules! error {
    ($err:ident) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
    };
    ($err:ident, $addr:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).in_address($addr)
    };
    ($err:ident; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err).message($msg)
    };
    ($err:ident, $addr:expr; $msg:expr) => {
        $crate::mach::Error::new($crate::mach::ErrorCode::$err)
            .in_address($addr)
            .message($msg)
    };
}

impl Error {
    pub fn new(code: ErrorCode) -> Error {
        Error {
            code,
            address: None,
            message: "",
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn address(&self) -> Option<Address> {
        self.address
    }

    pub fn detail(&self) -> &'static str {
        self.message
    }

    /// Tags the error with the tape address of the faulting instruction.
    /// An address already present is kept.
    pub fn in_address(&self, address: Address) -> Error {
        Error {
            code: self.code,
            address: self.address.or(Some(address)),
            message: self.message,
        }
    }

    pub fn message(&self, message: &'static str) -> Error {
        debug_assert_eq!(self.message.len(), 0);
        Error {
            code: self.code,
            address: self.address,
            message,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    UnknownOpcode = 1,
    InvalidOperand = 2,
    JumpStackUnderflow = 3,
    CyclesExceeded = 4,
    TapeFrozen = 5,
    OutOfMemory = 7,
}

impl std::fmt::Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error {{ {} }}", self.to_string())
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let code_str = match self.code {
            ErrorCode::UnknownOpcode => "UNKNOWN OPCODE",
            ErrorCode::InvalidOperand => "INVALID OPERAND",
            ErrorCode::JumpStackUnderflow => "JUMP STACK UNDERFLOW",
            ErrorCode::CyclesExceeded => "CYCLES EXCEEDED",
            ErrorCode::TapeFrozen => "TAPE FROZEN",
            ErrorCode::OutOfMemory => "OUT OF MEMORY",
        };
        let mut suffix = String::new();
        if let Some(address) = self.address {
            suffix.push_str(&format!(" {}", address));
        }
        if !self.message.is_empty() {
            suffix.push_str(&format!("; {}", self.message));
        }
        if suffix.is_empty() {
            write!(f, "{}", code_str)
        } else {
            write!(f, "{} IN{}", code_str, suffix)
        }
    }
}

impl std::error::Error for Error {}
