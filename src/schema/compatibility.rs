//! Compatibility decisions over schema discrepancy reports
//!
//! Consumes the records produced by [`compare_schemas`] and decides whether a
//! client holding the view schema may safely open a document carrying the
//! stored schema. The rule is containment: the view may *extend* the stored
//! schema (new node types, new admissible content) but never restrict it,
//! since a stored document may already contain anything the stored schema
//! admits.

use log::debug;

use crate::schema::discrepancy::compare_schemas;
use crate::schema::types::{Discrepancy, FieldDiscrepancy, FieldKind, TreeStoredSchema};

/// Summary verdict of a view-versus-stored schema comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompatibilityLevel {
    /// The schemas are structurally identical.
    Equivalent,
    /// The view schema admits every document the stored schema admits, plus
    /// more. Reading is safe; writing requires upgrading the stored schema.
    ViewExtendsStored,
    /// At least one divergence restricts or alters what the stored schema
    /// admits. The client must not read or write the document.
    Incompatible,
}

/// Returns true when every document valid under `stored` is also valid under
/// `view`.
pub fn is_schema_superset(view: &TreeStoredSchema, stored: &TreeStoredSchema) -> bool {
    check_compatibility(view, stored) != CompatibilityLevel::Incompatible
}

/// Compares the two schemas and classifies the result.
pub fn check_compatibility(
    view: &TreeStoredSchema,
    stored: &TreeStoredSchema,
) -> CompatibilityLevel {
    let discrepancies = compare_schemas(view, stored);
    if discrepancies.is_empty() {
        return CompatibilityLevel::Equivalent;
    }

    for discrepancy in &discrepancies {
        if !is_view_extension(discrepancy) {
            debug!("Schema incompatibility: {:?}", discrepancy);
            return CompatibilityLevel::Incompatible;
        }
    }

    CompatibilityLevel::ViewExtendsStored
}

/// Whether a single discrepancy only widens what the view admits.
fn is_view_extension(discrepancy: &Discrepancy) -> bool {
    match discrepancy {
        // A node type declared only in the view cannot invalidate existing
        // content; a stored-only or re-kinded node type can.
        Discrepancy::NodeKind(d) => d.view.is_some() && d.stored.is_none(),
        Discrepancy::ValueSchema(_) => false,
        Discrepancy::AllowedTypes(d) => is_allowed_types_extension(&d.stored),
        Discrepancy::FieldKind(d) => is_field_kind_extension(d.view, d.stored),
        Discrepancy::NodeFields(d) => d.differences.iter().all(|difference| match difference {
            FieldDiscrepancy::AllowedTypes(d) => is_allowed_types_extension(&d.stored),
            FieldDiscrepancy::FieldKind(d) => is_field_kind_extension(d.view, d.stored),
        }),
    }
}

/// An allowed-type divergence is an extension when the stored side contributes
/// no types of its own, i.e. the view only added types.
fn is_allowed_types_extension(stored_only: &[String]) -> bool {
    stored_only.is_empty()
}

fn is_field_kind_extension(view: Option<FieldKind>, stored: Option<FieldKind>) -> bool {
    match (view, stored) {
        (Some(view_kind), Some(stored_kind)) => admits_superset_of(view_kind, stored_kind),
        // Field declared only in the view: existing documents have no content
        // there, so the view kind must admit emptiness.
        (Some(view_kind), None) => admits_empty(view_kind),
        // Field declared only in the stored schema: documents may already
        // have content there unless the stored kind forbids any.
        (None, Some(stored_kind)) => stored_kind == FieldKind::Forbidden,
        (None, None) => true,
    }
}

/// Partial order on field multiplicity: `sup` admits every content `sub`
/// admits.
///
/// `Forbidden` (zero) and `Required` (exactly one) both embed into `Optional`
/// (zero or one), and everything embeds into `Sequence` (zero or more).
/// `Forbidden` and `Required` are incomparable.
fn admits_superset_of(sup: FieldKind, sub: FieldKind) -> bool {
    sup == sub
        || matches!(
            (sup, sub),
            (FieldKind::Optional, FieldKind::Required)
                | (FieldKind::Optional, FieldKind::Forbidden)
                | (FieldKind::Sequence, _)
        )
}

/// Whether a field kind admits an empty field.
fn admits_empty(kind: FieldKind) -> bool {
    matches!(
        kind,
        FieldKind::Optional | FieldKind::Sequence | FieldKind::Forbidden
    )
}
