//! Interactive admin console.
//!
//! On entry the face list is fetched once; afterwards commands are
//! read line by line until EOF or `quit`.

use anyhow::Result;
use facepanel_api::FaceApi;
use facepanel_core::AdminPanel;
use std::io::{self, Write};

pub async fn run<A: FaceApi>(panel: &AdminPanel<A>) -> Result<()> {
    panel.refresh().await;
    print_help();

    loop {
        print!("facepanel> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if io::stdin().read_line(&mut line)? == 0 {
            break; // EOF
        }
        let line = line.trim();
        let (cmd, arg) = match line.split_once(' ') {
            Some((cmd, arg)) => (cmd, arg.trim()),
            None => (line, ""),
        };

        match cmd {
            "" => {}
            "list" | "l" => {
                panel.refresh().await;
            }
            "resync" | "r" => {
                panel.resync().await;
            }
            "delete" | "d" => {
                if arg.is_empty() {
                    eprintln!("usage: delete <name>");
                } else {
                    panel.delete(arg).await;
                }
            }
            "attendance" | "a" => {
                panel.attendance().await;
            }
            "reset-logs" => {
                panel.reset_attendance().await;
            }
            "help" | "?" => print_help(),
            "quit" | "q" | "exit" => break,
            other => eprintln!("unknown command: {other} (try 'help')"),
        }
    }

    Ok(())
}

fn print_help() {
    eprintln!("commands: list, resync, delete <name>, attendance, reset-logs, help, quit");
}
