// Monitoring backend client
pub mod monitoring_backend_trait;
pub mod whitebox_client;
pub mod whitebox_dto;
