pub mod crm;
pub mod storage;
