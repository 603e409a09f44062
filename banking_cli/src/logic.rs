use banking_common::cli::command::menu;
use banking_common::cli::constants::*;
use banking_common::cli::helpers::{failure, format_account_listing, format_statement, success};
use banking_common::cli::{Command, Console};
use banking_common::validation::validate_amount;
use banking_common::{Bank, BankingError};
use log::{debug, info};
use std::io::{self, BufRead, Write};
use std::ops::ControlFlow;

/// **Runs an interactive session over standard input and output.**
///
/// # Errors
/// - Standard input was closed before the `q` command, `ErrorKind::UnexpectedEof`;
/// - Any other I/O failure on the terminal.
pub fn main_loop() -> io::Result<()> {
    Session::new(Bank::new(), Console::stdio()).run()
}

/// **One run of the interactive menu**
///
/// Owns the bank, and with it all users and accounts, for as long as the session lasts.
pub struct Session<R, W> {
    bank: Bank,
    console: Console<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(bank: Bank, console: Console<R, W>) -> Self {
        Self { bank, console }
    }

    pub fn bank(&self) -> &Bank {
        &self.bank
    }

    pub fn into_parts(self) -> (Bank, Console<R, W>) {
        (self.bank, self.console)
    }

    /// **Shows the menu and executes commands until the operator quits.**
    ///
    /// Operation failures are reported to the operator and never end the session.
    ///
    /// # Errors
    /// - Input was exhausted before the quit command, `ErrorKind::UnexpectedEof`;
    /// - Any other I/O failure of the console.
    pub fn run(&mut self) -> io::Result<()> {
        info!("Session started");

        loop {
            let token = self.console.prompt(&menu())?;

            let flow = match Command::from_token(&token) {
                Ok(command) => self.dispatch(command)?,
                Err(err) => {
                    debug!("{err}");
                    self.console.say(&err)?;
                    ControlFlow::Continue(())
                }
            };

            if flow.is_break() {
                break;
            }
        }

        info!("Session ended by the operator");
        Ok(())
    }

    /// **Executes a single command**
    ///
    /// Commands that target an account first ask for its number;
    /// if there is no such account the command is abandoned.
    ///
    /// Returns `ControlFlow::Break` only for [`Command::Quit`].
    pub fn dispatch(&mut self, command: Command) -> io::Result<ControlFlow<()>> {
        debug!("Executing command `{}`", command.token());

        if command.targets_account() {
            if let Some(number) = self.select_account()? {
                match command {
                    Command::Deposit => self.deposit(number)?,
                    Command::Withdraw => self.withdraw(number)?,
                    _ => self.statement(number)?,
                }
            }
            return Ok(ControlFlow::Continue(()));
        }

        match command {
            Command::NewAccount => self.new_account()?,
            Command::ListAccounts => self.list_accounts()?,
            Command::NewUser => self.new_user()?,
            Command::Quit => {
                self.console.say(GOODBYE)?;
                return Ok(ControlFlow::Break(()));
            }
            Command::Deposit | Command::Withdraw | Command::Statement => {}
        }

        Ok(ControlFlow::Continue(()))
    }

    /// **Asks for an account number**
    ///
    /// Returns `None` after telling the operator when there is no such account.
    fn select_account(&mut self) -> io::Result<Option<u32>> {
        let raw = self.console.prompt(ACCOUNT_NUMBER_PROMPT)?;

        match self.bank.select_account(&raw) {
            Ok(number) => Ok(Some(number)),
            Err(err) => {
                self.report(&err)?;
                Ok(None)
            }
        }
    }

    /// **Deposit funds to an account**
    ///
    /// The amount has to be a positive number; it may have decimal places.
    fn deposit(&mut self, number: u32) -> io::Result<()> {
        let raw = self.console.prompt(DEPOSIT_PROMPT)?;
        let outcome = validate_amount(&raw).and_then(|amount| self.bank.deposit(number, amount));

        self.conclude(outcome, DEPOSIT_DONE)
    }

    /// **Withdraw funds from an account**
    ///
    /// The amount has to be a positive number, no larger than the balance,
    /// and no larger than the per-withdrawal limit.
    /// Each account may make only a limited number of withdrawals per session.
    fn withdraw(&mut self, number: u32) -> io::Result<()> {
        let raw = self.console.prompt(WITHDRAW_PROMPT)?;
        let outcome = validate_amount(&raw).and_then(|amount| self.bank.withdraw(number, amount));

        self.conclude(outcome, WITHDRAW_DONE)
    }

    /// **Prints the statement of an account**
    fn statement(&mut self, number: u32) -> io::Result<()> {
        match self.bank.account(number) {
            Ok(account) => self.console.say(format_statement(account)),
            Err(err) => self.report(&err),
        }
    }

    /// **Opens an account for an already registered user**
    fn new_account(&mut self) -> io::Result<()> {
        let cpf = self.console.prompt(OWNER_CPF_PROMPT)?;

        match self.bank.open_account(cpf.trim()).map(|account| account.number()) {
            Ok(number) => {
                self.console.say(success(ACCOUNT_CREATED))?;
                self.console.say(format!("Account number: {number}"))
            }
            Err(err) => self.report(&err),
        }
    }

    /// **Prints all accounts**
    fn list_accounts(&mut self) -> io::Result<()> {
        let listing = format_account_listing(self.bank.accounts().list_accounts());
        self.console.say(listing)
    }

    /// **Registers a new user**
    ///
    /// The CPF is asked for first, and checked right away,
    /// so that the operator isn't asked for the rest in vain.
    fn new_user(&mut self) -> io::Result<()> {
        let cpf = self.console.prompt(CPF_PROMPT)?;
        let cpf = cpf.trim();

        if let Err(err) = self.bank.ensure_cpf_available(cpf) {
            return self.report(&err);
        }

        let full_name = self.console.prompt(FULL_NAME_PROMPT)?;
        let birth_date = self.console.prompt(BIRTH_DATE_PROMPT)?;
        let address = self.console.prompt(ADDRESS_PROMPT)?;

        let outcome = self.bank.register_user(
            cpf,
            full_name.trim(),
            birth_date.trim(),
            address.trim(),
        );

        self.conclude(outcome, USER_CREATED)
    }

    fn conclude<T>(&mut self, outcome: Result<T, BankingError>, done: &str) -> io::Result<()> {
        match outcome {
            Ok(_) => self.console.say(success(done)),
            Err(err) => self.report(&err),
        }
    }

    fn report(&mut self, err: &BankingError) -> io::Result<()> {
        self.console.say(failure(err))
    }
}
