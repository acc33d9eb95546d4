//! Invocation router
//!
//! A static table from operation name to operation, built once from the
//! contract definition. Matching is exact and case-sensitive; anything else
//! falls through to the single unknown-operation error path.

use crate::schema::ContractDefinition;

/// An operation the state machine can run.
///
/// `FieldUpdate` carries the resolved index of the designated field, so the
/// handler never re-derives it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Seed,
    Create,
    PointQuery,
    RangeQueryAll,
    FieldUpdate { field_index: usize },
}

/// Name → operation table for one contract.
#[derive(Debug, Clone)]
pub struct Router {
    routes: Vec<(String, Operation)>,
}

impl Router {
    /// Builds the table from a validated definition.
    pub fn from_definition(definition: &ContractDefinition) -> Self {
        let ops = &definition.operations;
        let mut routes = vec![
            (ops.seed.clone(), Operation::Seed),
            (ops.create.clone(), Operation::Create),
            (ops.point_query.clone(), Operation::PointQuery),
            (ops.range_query.clone(), Operation::RangeQueryAll),
        ];
        if let (Some(name), Some(field_index)) =
            (&ops.field_update, definition.update_field_index())
        {
            routes.push((name.clone(), Operation::FieldUpdate { field_index }));
        }
        Self { routes }
    }

    /// Resolves an operation name; `None` for unknown names.
    pub fn resolve(&self, name: &str) -> Option<Operation> {
        self.routes
            .iter()
            .find(|(route, _)| route == name)
            .map(|(_, op)| *op)
    }

    /// The operation names this router answers to, in table order.
    pub fn operation_names(&self) -> impl Iterator<Item = &str> {
        self.routes.iter().map(|(name, _)| name.as_str())
    }
}
