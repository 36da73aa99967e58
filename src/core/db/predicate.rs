/// Structured filter predicates.
///
/// A safer alternative to raw `WHERE` fragments: each predicate names a column
/// and an operator carrying its operand(s). Operands are always bound as
/// parameters; only the column name is interpolated.
use crate::core::db::statement::placeholders;
use crate::core::Value;

/// Comparison operators for building filters
#[derive(Debug, Clone, PartialEq)]
pub enum Operator {
    Equal(Value),
    NotEqual(Value),
    GreaterThan(Value),
    GreaterThanOrEqual(Value),
    LessThan(Value),
    LessThanOrEqual(Value),
    Like(String),
    In(Vec<Value>),
    IsNull,
    IsNotNull,
}

/// A single `column <op> operand` condition
#[derive(Debug, Clone, PartialEq)]
pub struct Predicate {
    pub column: String,
    pub op: Operator,
}

impl Predicate {
    pub fn new(column: impl Into<String>, op: Operator) -> Self {
        Predicate {
            column: column.into(),
            op,
        }
    }

    pub fn equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, Operator::Equal(value.into()))
    }

    pub fn not_equals(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, Operator::NotEqual(value.into()))
    }

    pub fn greater_than(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, Operator::GreaterThan(value.into()))
    }

    pub fn less_than(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::new(column, Operator::LessThan(value.into()))
    }

    pub fn like(column: impl Into<String>, pattern: impl Into<String>) -> Self {
        Self::new(column, Operator::Like(pattern.into()))
    }

    pub fn is_in<V: Into<Value>>(column: impl Into<String>, values: impl IntoIterator<Item = V>) -> Self {
        Self::new(column, Operator::In(values.into_iter().map(Into::into).collect()))
    }

    /// Renders the SQL fragment and appends the bound operands to `params`.
    fn render(&self, params: &mut Vec<Value>) -> String {
        let column = &self.column;
        let (sql_op, operand) = match &self.op {
            Operator::Equal(v) => ("=", v.clone()),
            Operator::NotEqual(v) => ("<>", v.clone()),
            Operator::GreaterThan(v) => (">", v.clone()),
            Operator::GreaterThanOrEqual(v) => (">=", v.clone()),
            Operator::LessThan(v) => ("<", v.clone()),
            Operator::LessThanOrEqual(v) => ("<=", v.clone()),
            Operator::Like(pattern) => ("LIKE", Value::Text(pattern.clone())),
            // An empty IN list matches nothing and binds nothing.
            Operator::In(values) if values.is_empty() => return "0 = 1".to_string(),
            Operator::In(values) => {
                params.extend(values.iter().cloned());
                return format!("{} IN ({})", column, placeholders(values.len()));
            }
            Operator::IsNull => return format!("{} IS NULL", column),
            Operator::IsNotNull => return format!("{} IS NOT NULL", column),
        };
        params.push(operand);
        format!("{} {} ?", column, sql_op)
    }
}

/// Joins predicates with `AND`, returning the clause and its bound values.
pub(crate) fn render_predicates(predicates: &[Predicate]) -> (String, Vec<Value>) {
    let mut params = Vec::new();
    let clause = predicates
        .iter()
        .map(|p| p.render(&mut params))
        .collect::<Vec<_>>()
        .join(" AND ");
    (clause, params)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_each_operator() {
        let cases = vec![
            (Predicate::equals("a", 1), "a = ?", 1usize),
            (Predicate::not_equals("a", 1), "a <> ?", 1),
            (Predicate::greater_than("a", 1), "a > ?", 1),
            (Predicate::less_than("a", 1), "a < ?", 1),
            (Predicate::new("a", Operator::GreaterThanOrEqual(1.into())), "a >= ?", 1),
            (Predicate::new("a", Operator::LessThanOrEqual(1.into())), "a <= ?", 1),
            (Predicate::like("a", "x%"), "a LIKE ?", 1),
            (Predicate::is_in("a", [1, 2, 3]), "a IN (?, ?, ?)", 3),
            (Predicate::is_in("a", Vec::<i64>::new()), "0 = 1", 0),
            (Predicate::new("a", Operator::IsNull), "a IS NULL", 0),
            (Predicate::new("a", Operator::IsNotNull), "a IS NOT NULL", 0),
        ];

        for (predicate, expected_sql, expected_params) in cases {
            let (sql, params) = render_predicates(std::slice::from_ref(&predicate));
            assert_eq!(sql, expected_sql);
            assert_eq!(params.len(), expected_params, "bind count for {}", expected_sql);
        }
    }

    #[test]
    fn test_render_conjunction_keeps_bind_order() {
        let (sql, params) = render_predicates(&[
            Predicate::is_in("id", [4, 5]),
            Predicate::new("deleted_at", Operator::IsNull),
            Predicate::equals("name", "Ann"),
        ]);
        assert_eq!(sql, "id IN (?, ?) AND deleted_at IS NULL AND name = ?");
        assert_eq!(
            params,
            vec![Value::Integer(4), Value::Integer(5), Value::Text("Ann".into())]
        );
    }
}
