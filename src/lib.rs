mod numberlocator;
mod tables;
pub mod i18n;
pub mod interfaces;


pub use numberlocator::errors;
pub use numberlocator::{NumberLocator, NumberMetadata, PhoneNumber};
pub use tables::{
    AreaCodeRecord, AreaCodeTable, BlockRecord, BlockTable, ExchangeRecord, ExchangeTable,
    InMemorySource, ReferenceTables, TablesTakenError,
};
