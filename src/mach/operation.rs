use super::Val;
use crate::error;
use crate::lang::Error;

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn sum(lhs: Val, rhs: Val) -> Result<Val> {
        match (lhs.as_integer(), rhs.as_integer()) {
            (Some(l), Some(r)) => match l.checked_add(r) {
                Some(i) => Ok(Val::Integer(i)),
                None => Err(error!(Overflow)),
            },
            _ => Err(error!(TypeError; &format!(
                "{} + {}",
                lhs.type_name(),
                rhs.type_name()
            ))),
        }
    }
}
