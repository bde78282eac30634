//! Núcleo de lógica del sistema
//!
//! Funciones puras y síncronas sobre snapshots en memoria: la máquina de
//! estados de los bloques de entrega y la agregación de métricas. Nada aquí
//! hace I/O; la persistencia vive en los repositorios.

pub mod lifecycle;
pub mod metrics;
