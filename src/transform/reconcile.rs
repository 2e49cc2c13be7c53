//! Re-resolving field references after the available field set changes.
//!
//! Filters, sorting and grouping point at selected fields by value. When the
//! available fields are reloaded each reference is looked up again, by `id`
//! first and then by `(tableName, fieldName)`, and rebuilt from the fresh
//! field. References that no longer resolve are dropped.

use crate::filter::is_operator_allowed;
use crate::model::{FieldReference, GroupByField, ReportDefinition, SelectedField, SortField};

/// A reference that can be rebuilt from a freshly resolved field.
pub trait Rebind: FieldReference + Sized {
    fn rebind(&self, fresh: &SelectedField) -> Self;
}

impl Rebind for SelectedField {
    fn rebind(&self, fresh: &SelectedField) -> Self {
        fresh.clone()
    }
}

impl Rebind for SortField {
    fn rebind(&self, fresh: &SelectedField) -> Self {
        SortField::for_field(fresh, self.direction)
    }
}

impl Rebind for GroupByField {
    fn rebind(&self, fresh: &SelectedField) -> Self {
        GroupByField::for_field(fresh)
    }
}

/// Find the field `reference` points at.
pub fn resolve_field<'a, R>(reference: &R, available: &'a [SelectedField]) -> Option<&'a SelectedField>
where
    R: FieldReference + ?Sized,
{
    available
        .iter()
        .find(|f| f.id == reference.field_id())
        .or_else(|| available.iter().find(|f| f.same_column(reference)))
}

/// Rebind every reference to its fresh field, dropping unresolved ones.
pub fn reconcile_references<R: Rebind>(references: &[R], available: &[SelectedField]) -> Vec<R> {
    references
        .iter()
        .filter_map(|reference| match resolve_field(reference, available) {
            Some(fresh) => Some(reference.rebind(fresh)),
            None => {
                tracing::debug!(field = reference.field_id(), "dropping unresolved field reference");
                None
            }
        })
        .collect()
}

/// Reconcile all references of `report` against `available`.
///
/// Selected fields, sorting and grouping are rebound. Filters get their field
/// rebound and are dropped when the field is gone or its new type no longer
/// allows the filter's operator. Everything else is copied.
pub fn reconcile_report(report: &ReportDefinition, available: &[SelectedField]) -> ReportDefinition {
    let filters = report
        .filters
        .iter()
        .filter_map(|filter| {
            let fresh = resolve_field(&filter.field, available)?;
            if !is_operator_allowed(fresh.data_type, filter.operator) {
                tracing::debug!(
                    filter = %filter.id,
                    operator = %filter.operator,
                    "dropping filter with operator illegal for the resolved field"
                );
                return None;
            }
            let mut filter = filter.clone();
            filter.field = fresh.clone();
            Some(filter)
        })
        .collect();

    ReportDefinition {
        selected_fields: reconcile_references(&report.selected_fields, available),
        filters,
        group_by: reconcile_references(&report.group_by, available),
        sorting: reconcile_references(&report.sorting, available),
        ..report.clone()
    }
}
