/// ## Runtime value
///
/// Constant pool entries and operand stack slots.

#[derive(Debug, Clone, PartialEq)]
pub enum Val {
    Integer(i64),
    Boolean(bool),
}

impl Val {
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Val::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Val::Integer(_) => "INTEGER",
            Val::Boolean(_) => "BOOLEAN",
        }
    }
}

impl std::fmt::Display for Val {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Val::Integer(n) => write!(f, "{}", n),
            Val::Boolean(b) => write!(f, "{}", b),
        }
    }
}
