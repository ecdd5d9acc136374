use super::types::{QueryFilter, TextMatch};

/// Renders a [`QueryFilter`] as a parameterised Postgres WHERE clause
pub struct FilterWhere {
    param_values: Vec<String>,
    param_index: usize,
}

impl FilterWhere {
    pub fn new(starting_param_index: usize) -> Self {
        Self {
            param_values: vec![],
            param_index: starting_param_index,
        }
    }

    /// Returns the clause body (without `WHERE`) and its bind values.
    /// An unconstrained filter renders as `1=1`.
    pub fn generate(filter: &QueryFilter, starting_param_index: usize) -> (String, Vec<String>) {
        let mut filter_where = Self::new(starting_param_index);
        filter_where.build(filter)
    }

    fn build(&mut self, filter: &QueryFilter) -> (String, Vec<String>) {
        let mut sql_conditions = vec![];

        if let Some(text) = &filter.text {
            sql_conditions.push(self.text_condition(text));
        }
        // Categorical columns may be Postgres enums; compare them as text
        if let Some(category) = &filter.category {
            let p = self.param(category.as_str().to_string());
            sql_conditions.push(format!("\"category\"::text = {}", p));
        }
        if let Some(section) = &filter.tax_section {
            let p = self.param(section.as_str().to_string());
            sql_conditions.push(format!("\"taxSection\"::text = {}", p));
        }

        let where_clause = if sql_conditions.is_empty() { "1=1".to_string() } else { sql_conditions.join(" AND ") };
        (where_clause, std::mem::take(&mut self.param_values))
    }

    fn text_condition(&mut self, text: &TextMatch) -> String {
        let p = self.param(like_pattern(&text.needle));
        format!(
            "(\"{}\" ILIKE {p} OR \"{}\" ILIKE {p})",
            text.fields.primary.column(),
            text.fields.secondary.column(),
        )
    }

    fn param(&mut self, value: String) -> String {
        self.param_values.push(value);
        self.param_index += 1;
        format!("${}", self.param_index)
    }
}

/// `%needle%` with LIKE metacharacters escaped so they match literally
pub fn like_pattern(needle: &str) -> String {
    let mut out = String::with_capacity(needle.len() + 2);
    out.push('%');
    for c in needle.chars() {
        if matches!(c, '\\' | '%' | '_') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('%');
    out
}
