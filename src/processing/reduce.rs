//! Reducers over loosely typed numeric sequences.

use crate::error::{WeatherError, WeatherResult};
use crate::types::{Extremum, Number, Value};

/// Coerce a single reducer element into a [`Number`].
///
/// - `Int64` / `Float64` pass through.
/// - `Utf8` is trimmed and parsed as a float if it contains `.`, otherwise as an integer.
/// - `Null` / `Bool` (and unparsable strings) fail with [`WeatherError::InvalidElement`].
pub fn coerce(index: usize, value: &Value) -> WeatherResult<Number> {
    let invalid = || WeatherError::InvalidElement {
        index,
        raw: value.to_string(),
    };

    match value {
        Value::Int64(v) => Ok(Number::Int(*v)),
        Value::Float64(v) => Ok(Number::Float(*v)),
        Value::Utf8(s) => {
            let trimmed = s.trim();
            if trimmed.contains('.') {
                trimmed.parse::<f64>().map(Number::Float).map_err(|_| invalid())
            } else {
                trimmed.parse::<i64>().map(Number::Int).map_err(|_| invalid())
            }
        }
        Value::Null | Value::Bool(_) => Err(invalid()),
    }
}

/// Coerce a whole sequence, failing on the first invalid element.
///
/// Returns a fresh vector; the caller's slice is left untouched.
pub fn coerce_all(values: &[Value]) -> WeatherResult<Vec<Number>> {
    values
        .iter()
        .enumerate()
        .map(|(i, v)| coerce(i, v))
        .collect()
}

/// Arithmetic mean of a sequence of numbers or numeric strings.
///
/// Fails with [`WeatherError::EmptyInput`] for an empty sequence.
pub fn mean(values: &[Value]) -> WeatherResult<f64> {
    let numbers = coerce_all(values)?;
    if numbers.is_empty() {
        return Err(WeatherError::EmptyInput);
    }
    let sum: f64 = numbers.iter().map(|n| n.as_f64()).sum();
    Ok(sum / numbers.len() as f64)
}

/// Minimum value and its index. On ties the **last** occurrence wins.
///
/// Returns `Ok(None)` for an empty sequence.
pub fn find_min(values: &[Value]) -> WeatherResult<Option<Extremum>> {
    scan_extremum(values, |candidate, best| candidate <= best)
}

/// Maximum value and its index. On ties the **last** occurrence wins.
///
/// Returns `Ok(None)` for an empty sequence.
pub fn find_max(values: &[Value]) -> WeatherResult<Option<Extremum>> {
    scan_extremum(values, |candidate, best| candidate >= best)
}

fn scan_extremum<F>(values: &[Value], replaces: F) -> WeatherResult<Option<Extremum>>
where
    F: Fn(Number, Number) -> bool,
{
    // Every element is validated before scanning starts.
    let numbers = coerce_all(values)?;

    let mut best: Option<Extremum> = None;
    for (index, value) in numbers.into_iter().enumerate() {
        best = match best {
            Some(b) if !replaces(value, b.value) => Some(b),
            _ => Some(Extremum { value, index }),
        };
    }
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::{coerce, find_max, find_min, mean};
    use crate::error::WeatherError;
    use crate::types::{Extremum, Number, Value};

    fn ints(vs: &[i64]) -> Vec<Value> {
        vs.iter().copied().map(Value::Int64).collect()
    }

    #[test]
    fn coerce_string_uses_decimal_point_to_pick_type() {
        assert!(matches!(coerce(0, &Value::from("12")).unwrap(), Number::Int(12)));
        assert!(matches!(
            coerce(0, &Value::from(" 12.5 ")).unwrap(),
            Number::Float(v) if v == 12.5
        ));
    }

    #[test]
    fn coerce_rejects_non_numeric_elements() {
        let err = coerce(3, &Value::from("abc")).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidElement { index: 3, .. }));
        assert!(matches!(
            coerce(0, &Value::Bool(true)).unwrap_err(),
            WeatherError::InvalidElement { .. }
        ));
        assert!(matches!(
            coerce(0, &Value::Null).unwrap_err(),
            WeatherError::InvalidElement { .. }
        ));
    }

    #[test]
    fn mean_of_ints_floats_and_strings() {
        assert_eq!(mean(&ints(&[1, 2, 3, 4])).unwrap(), 2.5);
        let mixed = vec![Value::from("10"), Value::Float64(20.0), Value::from("30.0")];
        assert_eq!(mean(&mixed).unwrap(), 20.0);
    }

    #[test]
    fn mean_of_empty_fails() {
        assert!(matches!(mean(&[]).unwrap_err(), WeatherError::EmptyInput));
    }

    #[test]
    fn mean_propagates_invalid_element() {
        let err = mean(&[Value::Int64(1), Value::from("x")]).unwrap_err();
        assert!(matches!(err, WeatherError::InvalidElement { index: 1, .. }));
    }

    #[test]
    fn find_min_returns_last_index_on_ties() {
        let out = find_min(&ints(&[3, 1, 1, 5])).unwrap();
        assert_eq!(
            out,
            Some(Extremum {
                value: Number::Int(1),
                index: 2
            })
        );
    }

    #[test]
    fn find_max_returns_last_index_on_ties() {
        let out = find_max(&ints(&[3, 5, 5, 1])).unwrap();
        assert_eq!(
            out,
            Some(Extremum {
                value: Number::Int(5),
                index: 2
            })
        );
    }

    #[test]
    fn find_min_max_empty_is_none() {
        assert_eq!(find_min(&[]).unwrap(), None);
        assert_eq!(find_max(&[]).unwrap(), None);
    }

    #[test]
    fn extremum_index_points_at_returned_value() {
        let values = vec![
            Value::from("49"),
            Value::Int64(57),
            Value::from("56.5"),
            Value::Float64(-2.5),
            Value::Int64(57),
        ];
        let min = find_min(&values).unwrap().unwrap();
        let max = find_max(&values).unwrap().unwrap();
        assert_eq!(min.index, 3);
        assert_eq!(min.value, Number::Float(-2.5));
        assert_eq!(max.index, 4);
        assert_eq!(max.value, Number::Int(57));
    }

    #[test]
    fn find_min_does_not_touch_input() {
        let values = vec![Value::from("7"), Value::from("3")];
        let _ = find_min(&values).unwrap();
        assert_eq!(values, vec![Value::from("7"), Value::from("3")]);
    }

    #[test]
    fn find_max_fails_on_bad_element_even_if_it_would_not_win() {
        let values = vec![Value::Int64(100), Value::Null];
        assert!(matches!(
            find_max(&values).unwrap_err(),
            WeatherError::InvalidElement { index: 1, .. }
        ));
    }
}
