pub mod currency;
pub mod date;

use crate::core::pipeline::operation::{OpKind, OperationRegistry, OperationRegistryBuilder};

/// Register built-in column operations into the supplied builder.
pub fn register_builtins(builder: &mut OperationRegistryBuilder) {
    builder
        .register(OpKind::Column, date::DateOperation)
        .register(OpKind::Column, currency::NormalizeCurrencyOperation);
}

/// A registry holding exactly the built-in operations.
pub fn builtin_registry() -> OperationRegistry {
    let mut builder = OperationRegistry::builder();
    register_builtins(&mut builder);
    builder.build()
}
