//! ViralTitle: topic in, click-worthy video titles out.
//!
//! SYSTEM CONTEXT
//! ==============
//! `services::titles` is the generation client; `routes` exposes it as the
//! `/api/generate` intermediary; `remote` calls that intermediary; `view`
//! is the front-end state machine both terminal modes drive.

pub mod error;
pub mod llm;
pub mod remote;
pub mod routes;
pub mod services;
pub mod state;
pub mod terminal;
pub mod view;
