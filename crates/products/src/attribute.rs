//! Attributes and their value combinations.

use serde::{Deserialize, Serialize};

/// Upper bound on attribute slots a variable product may declare.
pub const MAX_ATTRIBUTES: usize = 5;

/// Bound a requested attribute count to `1..=MAX_ATTRIBUTES`.
pub fn clamp_attribute_count(requested: usize) -> usize {
    requested.clamp(1, MAX_ATTRIBUTES)
}

/// A named attribute with its ordered list of values (e.g. Size = S, M, L).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub values: Vec<String>,
}

impl Attribute {
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    /// An attribute slot that was never filled in: no name, no values.
    pub fn unset() -> Self {
        Self {
            name: String::new(),
            values: Vec::new(),
        }
    }

    /// Parse a comma-separated value field. Every segment is a value, blank ones
    /// included, so `"S,M,"` has three values and an empty field has one.
    pub fn parse(name: impl Into<String>, raw_values: &str) -> Self {
        let values = raw_values
            .split(',')
            .map(str::trim)
            .map(str::to_string)
            .collect();
        Self {
            name: name.into(),
            values,
        }
    }

    /// Values as written into the summary row's `Attribute {i} Values` column.
    pub fn joined_values(&self) -> String {
        self.values
            .iter()
            .map(|v| v.trim())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// One value per attribute, in attribute order.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Combination(Vec<String>);

impl Combination {
    pub fn values(&self) -> &[String] {
        &self.0
    }

    /// Value chosen for the attribute at zero-based `index`.
    pub fn value(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    /// Caption for per-variation inputs, e.g. `"S, Red"`.
    pub fn label(&self) -> String {
        self.0.join(", ")
    }
}

impl From<Vec<String>> for Combination {
    fn from(values: Vec<String>) -> Self {
        Self(values)
    }
}

/// Cartesian product of the attributes' values.
///
/// The first attribute varies slowest and the last fastest. Any attribute without
/// values makes the product empty. With no attributes at all the product holds a
/// single empty combination.
pub fn expand(attributes: &[Attribute]) -> Vec<Combination> {
    let mut combinations: Vec<Vec<String>> = vec![Vec::new()];

    for attribute in attributes {
        let mut next = Vec::with_capacity(combinations.len() * attribute.values.len());
        for prefix in &combinations {
            for value in &attribute.values {
                let mut combination = prefix.clone();
                combination.push(value.trim().to_string());
                next.push(combination);
            }
        }
        combinations = next;
    }

    combinations.into_iter().map(Combination).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(combinations: &[Combination]) -> Vec<String> {
        combinations.iter().map(Combination::label).collect()
    }

    #[test]
    fn expands_in_lexicographic_attribute_order() {
        let attributes = vec![
            Attribute::new("Size", ["S", "M"]),
            Attribute::new("Color", ["Red", "Blue"]),
        ];

        let combinations = expand(&attributes);
        assert_eq!(
            labels(&combinations),
            vec!["S, Red", "S, Blue", "M, Red", "M, Blue"]
        );
    }

    #[test]
    fn values_are_trimmed_before_combination() {
        let attributes = vec![Attribute::new("Color", [" Red ", "Blue "])];
        let combinations = expand(&attributes);
        assert_eq!(combinations[0].value(0), Some("Red"));
        assert_eq!(combinations[1].value(0), Some("Blue"));
    }

    #[test]
    fn empty_value_list_yields_no_combinations() {
        let attributes = vec![
            Attribute::new("Size", ["S", "M"]),
            Attribute::new("Color", Vec::<String>::new()),
        ];
        assert!(expand(&attributes).is_empty());
    }

    #[test]
    fn no_attributes_yield_one_empty_combination() {
        let combinations = expand(&[]);
        assert_eq!(combinations.len(), 1);
        assert!(combinations[0].values().is_empty());
    }

    #[test]
    fn parse_trims_and_keeps_blank_segments() {
        let attribute = Attribute::parse("Size", " S, M ,, L ,");
        assert_eq!(attribute.values, vec!["S", "M", "", "L", ""]);

        let trailing = Attribute::parse("Size", "S,M,");
        assert_eq!(trailing.values, vec!["S", "M", ""]);
        assert_eq!(expand(&[trailing]).len(), 3);

        assert_eq!(Attribute::parse("Size", "   ").values, vec![""]);
    }

    #[test]
    fn unset_slot_has_no_values() {
        let unset = Attribute::unset();
        assert!(unset.name.is_empty());
        assert!(expand(&[unset]).is_empty());
    }

    #[test]
    fn attribute_count_is_bounded() {
        assert_eq!(clamp_attribute_count(0), 1);
        assert_eq!(clamp_attribute_count(3), 3);
        assert_eq!(clamp_attribute_count(9), MAX_ATTRIBUTES);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn attributes_strategy() -> impl Strategy<Value = Vec<Attribute>> {
            prop::collection::vec(
                ("[A-Za-z]{1,8}", prop::collection::vec("[A-Za-z0-9]{1,6}", 0..4)),
                0..=MAX_ATTRIBUTES,
            )
            .prop_map(|specs| {
                specs
                    .into_iter()
                    .map(|(name, values)| Attribute::new(name, values))
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: the expansion holds exactly the product of the value counts.
            #[test]
            fn expansion_size_is_product_of_value_counts(attributes in attributes_strategy()) {
                let expected: usize = attributes.iter().map(|a| a.values.len()).product();
                prop_assert_eq!(expand(&attributes).len(), expected);
            }

            /// Property: combinations follow odometer order over value indices.
            #[test]
            fn expansion_is_lexicographic_by_index(attributes in attributes_strategy()) {
                let combinations = expand(&attributes);
                let sizes: Vec<usize> = attributes.iter().map(|a| a.values.len()).collect();

                for (n, combination) in combinations.iter().enumerate() {
                    prop_assert_eq!(combination.values().len(), attributes.len());

                    // Decode n as a mixed-radix number, last attribute fastest.
                    let mut rest = n;
                    for i in (0..attributes.len()).rev() {
                        let digit = rest % sizes[i];
                        rest /= sizes[i];
                        prop_assert_eq!(combination.value(i), Some(attributes[i].values[digit].as_str()));
                    }
                }
            }
        }
    }
}
