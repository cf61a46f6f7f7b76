// SPDX-License-Identifier: AGPL-3.0-or-later
//
// Copyright (C) 2026 Relational Network

//! Password hashing utility.
//!
//! Takes a password as the first argument (or prompts for one), prints the
//! `salt:hash` storage form plus a freshly generated session secret.
//!
//! Usage: `hash-password [password]`

use std::env;
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use osinthub_server::auth::password;

fn main() -> ExitCode {
    println!("OSINT HUB - Password Hashing Utility");
    println!("====================================");

    let password = match env::args().nth(1) {
        Some(argument) => argument,
        None => match prompt_for_password() {
            Ok(line) => line,
            Err(error) => {
                eprintln!("Failed to read password: {error}");
                return ExitCode::from(1);
            }
        },
    };

    if password.is_empty() {
        eprintln!("No password provided");
        return ExitCode::from(1);
    }

    let report = password::validate_strength(&password);
    if !report.is_valid {
        eprintln!();
        eprintln!("Password strength warnings:");
        for error in &report.errors {
            eprintln!("   - {error}");
        }
    }

    let hashed = match password::hash(&password) {
        Ok(hashed) => hashed,
        Err(error) => {
            eprintln!("Failed to hash password: {error}");
            return ExitCode::from(1);
        }
    };

    println!();
    println!("Password hashed successfully!");
    println!("Hashed password: {hashed}");
    println!();
    println!("Add this to your .env file:");
    println!("OSINT_USER_X=username:{hashed}:email@example.com:admin:active");

    match password::generate_secret() {
        Ok(secret) => {
            println!();
            println!("Need a session secret? Here's a secure one:");
            println!("OSINT_SESSION_SECRET={secret}");
        }
        Err(error) => eprintln!("Failed to generate a session secret: {error}"),
    }

    println!();
    println!("Security reminders:");
    println!("   - Never commit passwords to version control");
    println!("   - Use unique, strong passwords for each user");
    println!("   - Rotate secrets regularly");

    ExitCode::SUCCESS
}

fn prompt_for_password() -> io::Result<String> {
    print!("Enter password to hash: ");
    io::stdout().flush()?;

    let mut line = String::new();
    io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
