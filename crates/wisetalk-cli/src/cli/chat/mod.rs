//! Interactive CLI chat experience for WiseTalk.
//!
//! Each submitted line is a trigger action: the controller fetches a quote
//! the user has not seen yet and appends it to the transcript. Slash
//! commands manage the session. Entry point: `loop_runner::run_chat_loop`.

pub mod banner;
pub mod commands;
pub mod input;
pub mod loop_runner;
pub mod renderer;
