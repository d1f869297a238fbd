//! Chat Bot Module
//!
//! Text commands mapped onto the gospel service.
//!
//! # Commands
//! - `!gospel` - Today's reading in the default language
//! - `!gospel <language-code>` - Today's reading in the given language
//! - `!languages` - List some supported language codes

mod commands;
mod handler;

pub use commands::BotCommand;
pub use handler::{ChatBot, APOLOGY_MESSAGE};

/// Usage lines shown when the bot starts.
pub const HELP_TEXT: &str = "Commands:\n\
!gospel - Get today's gospel in the default language\n\
!gospel <language-code> - Get gospel in specified language (e.g., !gospel es)\n\
!languages - List some supported language codes";
