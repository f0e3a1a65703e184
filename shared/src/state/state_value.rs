use std::collections::BTreeMap;
use std::fmt;

/// A flat key-value table of script state. Keys iterate in sorted order.
pub type StateTable = BTreeMap<String, StateValue>;

/// A dynamically-typed value as stored by scripts in a component's state
#[derive(Clone, Debug, PartialEq, Default)]
pub enum StateValue {
    /// The absent value
    #[default]
    Nil,
    Bool(bool),
    Integer(i64),
    Number(f64),
    String(String),
    /// A nested table. Cloning it copies the whole tree.
    Table(StateTable),
}

impl StateValue {
    pub fn type_name(&self) -> &'static str {
        match self {
            StateValue::Nil => "nil",
            StateValue::Bool(_) => "bool",
            StateValue::Integer(_) => "integer",
            StateValue::Number(_) => "number",
            StateValue::String(_) => "string",
            StateValue::Table(_) => "table",
        }
    }

    pub fn is_nil(&self) -> bool {
        matches!(self, StateValue::Nil)
    }

    pub fn as_table(&self) -> Option<&StateTable> {
        match self {
            StateValue::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn into_table(self) -> Option<StateTable> {
        match self {
            StateValue::Table(table) => Some(table),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            StateValue::Bool(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self {
            StateValue::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Integers widen to `f64`
    pub fn as_number(&self) -> Option<f64> {
        match self {
            StateValue::Integer(value) => Some(*value as f64),
            StateValue::Number(value) => Some(*value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StateValue::String(value) => Some(value),
            _ => None,
        }
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Nil => write!(f, "nil"),
            StateValue::Bool(value) => write!(f, "{}", value),
            StateValue::Integer(value) => write!(f, "{}", value),
            StateValue::Number(value) => write!(f, "{}", value),
            StateValue::String(value) => write!(f, "{:?}", value),
            StateValue::Table(table) => {
                write!(f, "{{")?;
                for (index, (key, value)) in table.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", key, value)?;
                }
                write!(f, "}}")
            }
        }
    }
}

impl From<bool> for StateValue {
    fn from(value: bool) -> Self {
        StateValue::Bool(value)
    }
}

impl From<i32> for StateValue {
    fn from(value: i32) -> Self {
        StateValue::Integer(value as i64)
    }
}

impl From<i64> for StateValue {
    fn from(value: i64) -> Self {
        StateValue::Integer(value)
    }
}

impl From<u32> for StateValue {
    fn from(value: u32) -> Self {
        StateValue::Integer(value as i64)
    }
}

impl From<f32> for StateValue {
    fn from(value: f32) -> Self {
        StateValue::Number(value as f64)
    }
}

impl From<f64> for StateValue {
    fn from(value: f64) -> Self {
        StateValue::Number(value)
    }
}

impl From<&str> for StateValue {
    fn from(value: &str) -> Self {
        StateValue::String(value.to_string())
    }
}

impl From<String> for StateValue {
    fn from(value: String) -> Self {
        StateValue::String(value)
    }
}

impl From<StateTable> for StateValue {
    fn from(table: StateTable) -> Self {
        StateValue::Table(table)
    }
}

impl<T: Into<StateValue>> From<Option<T>> for StateValue {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => StateValue::Nil,
        }
    }
}

/// Builds a [`StateTable`] from `key => value` pairs.
///
/// ```
/// use statekit_shared::{state_table, StateValue};
///
/// let table = state_table! { "hp" => 100, "name" => "orc" };
/// assert_eq!(table.get("hp"), Some(&StateValue::Integer(100)));
/// ```
#[macro_export]
macro_rules! state_table {
    () => {
        $crate::StateTable::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut table = $crate::StateTable::new();
        $(
            table.insert(::std::string::String::from($key), $crate::StateValue::from($value));
        )+
        table
    }};
}
