use super::*;
use crate::lang::ErrorCode;


fn concat(parts: &[Vec<u8>]) -> Instructions {
    parts.concat().into()
}
