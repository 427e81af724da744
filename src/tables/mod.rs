mod records;
mod tables;

pub use records::{AreaCodeRecord, BlockRecord, ExchangeRecord};
pub use tables::{
    AreaCodeTable, BlockTable, ExchangeTable, InMemorySource, ReferenceTables, TablesTakenError,
};
