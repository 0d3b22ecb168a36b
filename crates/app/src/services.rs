//! Use-case services — driving ports of the application.

pub mod quote_service;
