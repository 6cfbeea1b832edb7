//! Type-checked access to an untyped YAML parameter block

use serde_yaml::{Mapping, Value};

use crate::common::{Error, Result};

/// A value type that can be read out of a parameter block
pub trait FromParameter: Sized {
    /// Convert the raw value, or `None` if it has the wrong type
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromParameter for i64 {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_i64()
    }
}

impl FromParameter for String {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_str().map(str::to_string)
    }
}

impl FromParameter for Parameters {
    fn from_value(value: &Value) -> Option<Self> {
        value.as_mapping().cloned().map(Parameters::new)
    }
}

/// Immutable view over a key-value block of a descriptor
///
/// Lookups never coerce: an integer is not a string, a string is not a
/// mapping. A key whose value is YAML null counts as absent.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Parameters {
    values: Mapping,
}

impl Parameters {
    pub fn new(values: Mapping) -> Self {
        Self { values }
    }

    /// Read `key` as `T`
    ///
    /// Fails with `MissingParameter` if the key is absent and with
    /// `IllegalParameter` if the value is not a `T`.
    pub fn get<T: FromParameter>(&self, key: &str) -> Result<T> {
        match self.values.get(key) {
            None | Some(Value::Null) => Err(Error::missing(key)),
            Some(value) => T::from_value(value).ok_or_else(|| Error::illegal_parameter(key)),
        }
    }

    /// String keys of the block, in document order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().filter_map(Value::as_str)
    }
}

impl From<Mapping> for Parameters {
    fn from(values: Mapping) -> Self {
        Self::new(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(yaml: &str) -> Parameters {
        let mapping: Mapping = serde_yaml::from_str(yaml).unwrap();
        Parameters::new(mapping)
    }

    #[test]
    fn test_get_typed_values() {
        let p = params("name: test.foo\ncount: 3\nnested:\n  inner: x\n");
        assert_eq!(p.get::<String>("name").unwrap(), "test.foo");
        assert_eq!(p.get::<i64>("count").unwrap(), 3);
        let nested: Parameters = p.get("nested").unwrap();
        assert_eq!(nested.get::<String>("inner").unwrap(), "x");
    }

    #[test]
    fn test_missing_key() {
        let p = params("name: test.foo\n");
        let err = p.get::<String>("in_directory").unwrap_err();
        assert!(matches!(err, Error::MissingParameter { .. }));
        assert_eq!(
            err.to_string(),
            "Parameter in_directory is mandatory, but missing."
        );
    }

    #[test]
    fn test_null_value_counts_as_missing() {
        let p = params("assertion_id:\nfile_count: 1\n");
        let err = p.get::<String>("assertion_id").unwrap_err();
        assert!(matches!(err, Error::MissingParameter { .. }));
    }

    #[test]
    fn test_wrong_type_is_not_coerced() {
        let p = params("count: \"3\"\nname: 5\nratio: 1.5\nlist: [1, 2]\n");
        let err = p.get::<i64>("count").unwrap_err();
        assert_eq!(err.to_string(), "Illegal value for parameter count.");
        assert!(matches!(
            p.get::<String>("name").unwrap_err(),
            Error::IllegalParameter(_)
        ));
        assert!(p.get::<i64>("ratio").is_err());
        assert!(p.get::<Parameters>("list").is_err());
    }

    #[test]
    fn test_keys_in_document_order() {
        let p = params("b: 1\na: 2\n3: x\n");
        assert_eq!(p.keys().collect::<Vec<_>>(), vec!["b", "a"]);
    }
}
