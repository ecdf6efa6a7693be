/*

Scalc - A small interactive calculator
main.rs - Scalc command-line application
Copyright (C) 2022  Kian Kasad

This file is part of Scalc.

Scalc is free software: you can redistribute it and/or modify
it under the terms of the GNU General Public License as published by
the Free Software Foundation, version 3 of the License.

Scalc is distributed in the hope that it will be useful,
but WITHOUT ANY WARRANTY; without even the implied warranty of
MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
GNU General Public License for more details.

You should have received a copy of the GNU General Public License
along with Scalc.  If not, see <https://www.gnu.org/licenses/>.

*/

use rustyline::{error::ReadlineError, Editor};
use scalc::runtime::Runtime;

use self::textio::*;

macro_rules! message {
    ($name:literal) => {
        include_str!(concat!(env!("OUT_DIR"), "/messages/", $name, ".txt"))
    };
}

mod textio {
    pub const PROMPT: &str = "> ";

    #[cfg(feature = "debug")]
    pub const COLOR_DBG: &str = "\x1b[1;34m";

    pub const COLOR_ERR: &str = "\x1b[1;31m";
    pub const COLOR_WARN: &str = "\x1b[1;33m";
    pub const COLOR_RST: &str = "\x1b[m";

    pub const STARTUP_MESSAGE: &str = message!("startup");
}

/// Words which end the session instead of being evaluated.
const QUIT_COMMANDS: [&str; 3] = ["q", "quit", "exit"];

fn main() {
    env_logger::init();

    let mut rl = match Editor::<()>::new() {
        Ok(editor) => editor,
        Err(err) => {
            eprintln!(
                "{}Error:{} failed to create line editor: {}",
                COLOR_ERR, COLOR_RST, err
            );
            return;
        }
    };
    let mut rt = Runtime::new();

    eprintln!("{}", STARTUP_MESSAGE);

    loop {
        match rl.readline(PROMPT) {
            Ok(line) => {
                if QUIT_COMMANDS.contains(&line.as_str()) {
                    break;
                }
                if line.is_empty() {
                    continue;
                }

                rl.add_history_entry(&line);

                #[cfg(not(feature = "debug"))]
                {
                    match rt.evaluate(&line) {
                        Ok(value) => println!("{}", rt.format(value)),
                        Err(err) => eprintln!("{}Error:{} {}", COLOR_ERR, COLOR_RST, err),
                    }
                }

                #[cfg(feature = "debug")]
                {
                    let (tokens, result) = rt.evaluate_debug(&line);
                    eprintln!("{}Tokens:{} {:?}", COLOR_DBG, COLOR_RST, tokens);
                    match result {
                        Ok(value) => println!("{}", rt.format(value)),
                        Err(err) => eprintln!("{}Error:{} {}", COLOR_ERR, COLOR_RST, err),
                    }
                }
            }

            Err(ReadlineError::Eof) => {
                break;
            }

            Err(ReadlineError::Interrupted) => {
                eprintln!("{}Warning:{} process interrupted.", COLOR_WARN, COLOR_RST);
                break;
            }
            Err(e) => {
                eprintln!("{}Error:{} {:?}", COLOR_ERR, COLOR_RST, e);
                break;
            }
        }
    }
}
