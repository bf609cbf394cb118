#[repr(i32)]
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ErrorCode {
    Ok = 0,
    InvalidArg = 1,
    Mismatch = 2,
}

impl ErrorCode {
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

pub const HEL_OK: i32 = ErrorCode::Ok.code();
pub const HEL_ERR_INVALID_ARG: i32 = ErrorCode::InvalidArg.code();
pub const HEL_ERR_MISMATCH: i32 = ErrorCode::Mismatch.code();
