//! The interactive shell
//!
//! [`Shell`] reads menu choices and parameters line by line, calls into the
//! directory and the selected account, and prints the outcome. It is
//! generic over its streams so tests can drive it with a scripted
//! `Cursor` and inspect everything it printed.
//!
//! Failed operations are reported and the menu is shown again. Only I/O
//! failures and end of input stop the loop.

use std::io::{BufRead, Write};
use tracing::{debug, info, info_span, warn};

use core_kernel::{AccountNumber, SessionId};
use domain_directory::Directory;
use crate::error::CliError;
use crate::input::{parse_account_number, parse_account_type, parse_amount, trim_line_ending};
use crate::menu::{AccountMenuChoice, MainMenuChoice};

const SELECT_OPTION: &str = "Select an option: ";

/// Menu-driven front end over a [`Directory`]
pub struct Shell<R, W> {
    directory: Directory,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    /// Creates a shell over `directory` reading `input` and writing `output`
    pub fn new(directory: Directory, input: R, output: W) -> Self {
        Self {
            directory,
            input,
            output,
        }
    }

    /// Consumes the shell, returning the directory and the output stream
    pub fn into_parts(self) -> (Directory, W) {
        (self.directory, self.output)
    }

    /// Runs the main menu until Exit is chosen or input ends
    ///
    /// # Errors
    ///
    /// Returns `CliError::Io` if the streams fail; every other error is
    /// printed and the loop continues.
    pub fn run(&mut self) -> Result<(), CliError> {
        info!("Shell started");

        loop {
            write!(self.output, "{}", MainMenuChoice::TEXT)?;
            let line = match self.prompt(SELECT_OPTION) {
                Ok(line) => line,
                Err(CliError::EndOfInput) => break,
                Err(err) => return Err(err),
            };

            let result = match line.parse::<MainMenuChoice>() {
                Ok(MainMenuChoice::Register) => self.register(),
                Ok(MainMenuChoice::Login) => self.login(),
                Ok(MainMenuChoice::Exit) => break,
                Err(err) => Err(err),
            };

            match result {
                Ok(()) => {}
                Err(CliError::EndOfInput) => break,
                Err(err) if err.is_fatal() => return Err(err),
                Err(err) => self.report(&err)?,
            }
        }

        writeln!(self.output, "Goodbye!")?;
        self.output.flush()?;

        match self.directory.total_holdings() {
            Ok(total_holdings) => info!(
                users = self.directory.user_count(),
                total_holdings = %total_holdings,
                "Shell exited"
            ),
            Err(err) => warn!(
                users = self.directory.user_count(),
                error = %err,
                "Shell exited; total holdings could not be summed"
            ),
        }
        Ok(())
    }

    fn register(&mut self) -> Result<(), CliError> {
        let username = self.prompt("Enter username: ")?;
        let password = self.prompt("Enter password: ")?;

        self.directory.register(&username, &password)?;
        writeln!(self.output, "Registration successful!")?;
        Ok(())
    }

    fn login(&mut self) -> Result<(), CliError> {
        let username = self.prompt("Enter username: ")?;
        let password = self.prompt("Enter password: ")?;

        self.directory.login(&username, &password)?;
        writeln!(self.output, "Login successful. Welcome, {}!", username)?;
        self.session(&username)
    }

    fn session(&mut self, username: &str) -> Result<(), CliError> {
        let session_id = SessionId::new();
        let span = info_span!("session", session_id = %session_id, username = %username);
        let _guard = span.enter();
        info!("Session started");

        loop {
            write!(self.output, "{}", AccountMenuChoice::TEXT)?;
            let line = self.prompt(SELECT_OPTION)?;

            let result = match line.parse::<AccountMenuChoice>() {
                Ok(AccountMenuChoice::Logout) => break,
                Ok(choice) => self.dispatch(username, choice),
                Err(err) => Err(err),
            };

            if let Err(err) = result {
                if err.is_fatal() {
                    return Err(err);
                }
                self.report(&err)?;
            }
        }

        writeln!(self.output, "Logged out.")?;
        info!("Session ended");
        Ok(())
    }

    fn dispatch(&mut self, username: &str, choice: AccountMenuChoice) -> Result<(), CliError> {
        match choice {
            AccountMenuChoice::OpenAccount => self.open_account(username),
            AccountMenuChoice::Deposit => self.deposit(username),
            AccountMenuChoice::Withdraw => self.withdraw(username),
            AccountMenuChoice::GenerateStatement => self.generate_statement(username),
            AccountMenuChoice::CalculateInterest => self.calculate_interest(username),
            AccountMenuChoice::CheckBalance => self.check_balance(username),
            AccountMenuChoice::Logout => Ok(()),
        }
    }

    fn open_account(&mut self, username: &str) -> Result<(), CliError> {
        let holder_name = self.prompt("Enter account holder name: ")?;
        let account_type = parse_account_type(&self.prompt("Enter account type (savings/checking): ")?)?;
        let initial_deposit = parse_amount(&self.prompt("Enter initial deposit: ")?)?;

        let number = self
            .directory
            .open_account(username, &holder_name, account_type, initial_deposit)?
            .number();
        writeln!(self.output, "Account opened successfully! Account number: {}", number)?;
        Ok(())
    }

    fn deposit(&mut self, username: &str) -> Result<(), CliError> {
        let number = self.select_account(username)?;
        let amount = parse_amount(&self.prompt("Enter amount to deposit: ")?)?;

        let deposited = self.directory.account_mut(username, number)?.deposit(amount)?.amount();
        writeln!(self.output, "Deposited: {}", deposited)?;
        Ok(())
    }

    fn withdraw(&mut self, username: &str) -> Result<(), CliError> {
        let number = self.select_account(username)?;
        let amount = parse_amount(&self.prompt("Enter amount to withdraw: ")?)?;

        let withdrawn = self.directory.account_mut(username, number)?.withdraw(amount)?.amount();
        writeln!(self.output, "Withdrew: {}", withdrawn)?;
        Ok(())
    }

    fn generate_statement(&mut self, username: &str) -> Result<(), CliError> {
        let number = self.select_account(username)?;

        let account = self.directory.user(username)?.account(number)?;
        let statement = account.generate_statement();
        let closing_balance = statement.closing_balance();

        writeln!(self.output, "Statement for Account {}", statement.account_number())?;
        writeln!(self.output, "Holder: {}", statement.holder_name())?;
        writeln!(self.output, "Opening balance: {}", statement.opening_balance())?;
        for line in statement {
            writeln!(self.output, "{}", line)?;
        }
        writeln!(self.output, "Closing balance: {}", closing_balance)?;
        Ok(())
    }

    fn calculate_interest(&mut self, username: &str) -> Result<(), CliError> {
        let number = self.select_account(username)?;

        let credited = self
            .directory
            .account_mut(username, number)?
            .calculate_interest()?
            .map(|tx| tx.amount());

        match credited {
            Some(amount) => {
                writeln!(self.output, "Interest credited: {}", amount)?;
                writeln!(self.output, "Monthly interest added.")?;
            }
            None => writeln!(self.output, "Interest applies to savings accounts only.")?,
        }
        Ok(())
    }

    fn check_balance(&mut self, username: &str) -> Result<(), CliError> {
        let number = self.select_account(username)?;

        let balance = self.directory.user(username)?.account(number)?.check_balance();
        writeln!(self.output, "Balance: {}", balance)?;
        Ok(())
    }

    /// Reads an account number and confirms the logged-in user owns it
    fn select_account(&mut self, username: &str) -> Result<AccountNumber, CliError> {
        let number = parse_account_number(&self.prompt("Enter account number: ")?)?;
        self.directory.user(username)?.account(number)?;
        Ok(number)
    }

    fn prompt(&mut self, label: &str) -> Result<String, CliError> {
        write!(self.output, "{}", label)?;
        self.output.flush()?;

        let mut raw = Vec::new();
        if self.input.read_until(b'\n', &mut raw)? == 0 {
            return Err(CliError::EndOfInput);
        }
        let line = String::from_utf8(raw)
            .map_err(|_| CliError::invalid_input("input is not valid UTF-8."))?;
        Ok(trim_line_ending(&line).to_string())
    }

    fn report(&mut self, err: &CliError) -> Result<(), CliError> {
        debug!(error = %err, "Operation failed");
        writeln!(self.output, "{}", err.user_message())?;
        Ok(())
    }
}
