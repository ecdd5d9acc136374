use crate::filter::filter_order::FilterOrder;
use crate::filter::filter_where::FilterWhere;
use crate::filter::{OrderBy, QueryFilter, SqlResult};
use crate::pagination::Window;

use super::manager::{DatabaseError, DatabaseManager};
use super::store::GroupField;

// Enum-, uuid- and date-typed columns are cast so they decode as strings
// whatever the migration declared them as.
const CASE_LAW_COLUMNS: &str = "\"id\"::text AS \"id\", \"tid\", \"authorid\", \"bench\", \"catids\", \
\"docsize\", \"docsource\", \"doctype\", \"fragment\", \"headline\", \"description\", \"numcitedby\", \
\"numcites\", \"publishdate\"::text AS \"publishdate\", \"title\", \"category\"::text AS \"category\", \
\"taxSection\"::text AS \"taxSection\", \"createdAt\", \"updatedAt\"";

const CASE_DETAIL_COLUMNS: &str = "\"id\"::text AS \"id\", \"tid\", \"agreement\", \"citetid\", \
\"courtcopy\", \"divtype\", \"doc\", \"docsource\", \"numcitedby\", \"numcites\", \
\"publishdate\"::text AS \"publishdate\", \"queryAlert\", \"title\", \"createdAt\", \"updatedAt\"";

/// Builds the SQL text for one table. Execution lives in the store.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    table_name: String,
    columns: &'static str,
}

impl QueryBuilder {
    pub fn case_laws(table_name: impl Into<String>) -> Result<Self, DatabaseError> {
        Self::new(table_name.into(), CASE_LAW_COLUMNS)
    }

    pub fn case_details(table_name: impl Into<String>) -> Result<Self, DatabaseError> {
        Self::new(table_name.into(), CASE_DETAIL_COLUMNS)
    }

    fn new(table_name: String, columns: &'static str) -> Result<Self, DatabaseError> {
        DatabaseManager::validate_identifier(&table_name)?;
        Ok(Self { table_name, columns })
    }

    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    pub fn select(&self, filter: &QueryFilter, window: Window, order: &OrderBy) -> SqlResult {
        let (where_clause, params) = FilterWhere::generate(filter, 0);
        let query = format!(
            "SELECT {} FROM \"{}\" WHERE {} {} LIMIT {} OFFSET {}",
            self.columns,
            self.table_name,
            where_clause,
            FilterOrder::generate(order),
            window.take,
            window.skip,
        );
        SqlResult { query, params }
    }

    pub fn count(&self, filter: &QueryFilter) -> SqlResult {
        let (where_clause, params) = FilterWhere::generate(filter, 0);
        let query = format!(
            "SELECT COUNT(*) AS count FROM \"{}\" WHERE {}",
            self.table_name, where_clause
        );
        SqlResult { query, params }
    }

    pub fn group_count(&self, field: GroupField) -> SqlResult {
        let column = field.column();
        let query = format!(
            "SELECT \"{column}\"::text AS key, COUNT(*) AS count FROM \"{}\" GROUP BY \"{column}\"",
            self.table_name
        );
        SqlResult { query, params: vec![] }
    }

    /// Single row by `tid`, bound as `$1`
    pub fn by_tid(&self) -> String {
        format!(
            "SELECT {} FROM \"{}\" WHERE \"tid\" = $1 LIMIT 1",
            self.columns, self.table_name
        )
    }

    /// Rows whose `tid` is in the array bound as `$1`
    pub fn by_tids(&self) -> String {
        format!(
            "SELECT {} FROM \"{}\" WHERE \"tid\" = ANY($1)",
            self.columns, self.table_name
        )
    }
}
