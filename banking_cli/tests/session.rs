//! Whole sessions driven through scripted input.

use banking_cli::logic::Session;
use banking_common::accounts::Limits;
use banking_common::cli::Console;
use banking_common::types::Money;
use banking_common::Bank;
use std::io::{Cursor, ErrorKind};

const ALICE: &str = "nu\n12345678901\nAlice Smith\n01-02-1990\nMain St, 1 - Center - City/ST\n";

fn run(bank: Bank, script: &str) -> (Bank, String) {
    let console = Console::new(Cursor::new(script.as_bytes().to_vec()), Vec::new());
    let mut session = Session::new(bank, console);

    session.run().expect("The script ends with the quit command.");

    let (bank, console) = session.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    (bank, output)
}

#[test]
fn quit_ends_the_session() {
    let (bank, output) = run(Bank::new(), "q\n");

    assert!(output.contains("[q]\tQuit"));
    assert!(output.ends_with("Leaving the system.\n"));
    assert!(bank.users().is_empty());
}

#[test]
fn unrecognized_command_loops_back_to_the_menu() {
    let (_, output) = run(Bank::new(), "x\nq\n");

    assert!(output.contains("Invalid operation \"x\"; please select the desired operation again."));
    assert_eq!(2, output.matches("================ MENU ================").count());
}

#[test]
fn deposit_withdraw_and_statement() {
    let script = format!("{ALICE}nc\n12345678901\nd\n1\n100.00\ns\n1\n30.00\ne\n1\nq\n");

    let (bank, output) = run(Bank::new(), &script);

    let account = bank.account(1).unwrap();
    assert_eq!("R$ 70.00", account.balance().to_string());
    assert!(output.contains("=== User created successfully! ==="));
    assert!(output.contains("=== Account created successfully! ===\nAccount number: 1"));
    assert!(output.contains("=== Deposit completed successfully! ==="));
    assert!(output.contains("=== Withdrawal completed successfully! ==="));
    assert!(output.contains(
        "================ STATEMENT ================\n\
         Deposit:\tR$ 100.00\n\
         Withdrawal:\tR$ 30.00\n\
         \nBalance:\t\tR$ 70.00\n"
    ));
}

#[test]
fn duplicate_user_is_rejected_before_asking_for_details() {
    let script = format!("{ALICE}nu\n12345678901\nq\n");

    let (bank, output) = run(Bank::new(), &script);

    assert_eq!(1, bank.users().len());
    assert!(output.contains("@@@ A user with CPF 12345678901 already exists! @@@"));
    assert_eq!(1, output.matches("Enter the full name: ").count());
}

#[test]
fn account_for_unknown_user_is_not_opened() {
    let (bank, output) = run(Bank::new(), "nc\n10987654321\nlc\nq\n");

    assert!(bank.accounts().is_empty());
    assert!(output.contains("@@@ User with CPF \"10987654321\" not found; account creation aborted! @@@"));
    assert!(output.contains("No accounts registered."));
}

#[test]
fn accounts_are_numbered_in_creation_order() {
    let script = format!("{ALICE}nc\n12345678901\nnc\n12345678901\nnc\n12345678901\nlc\nq\n");

    let (bank, output) = run(Bank::new(), &script);

    let numbers: Vec<u32> = bank
        .accounts()
        .list_accounts()
        .iter()
        .map(|account| account.number())
        .collect();
    assert_eq!(vec![1, 2, 3], numbers);
    assert!(output.contains("Account:\t3\nHolder:\t\tAlice Smith"));
    assert_eq!(3, output.matches("Branch:\t\t0001").count());
}

#[test]
fn invalid_amounts_change_nothing() {
    let script = format!("{ALICE}nc\n12345678901\nd\n1\n-5\nd\n1\nabc\nd\n1\n0\ns\n1\nabc\nq\n");

    let (bank, output) = run(Bank::new(), &script);

    let account = bank.account(1).unwrap();
    assert!(account.statement().is_empty());
    assert_eq!(Money::default(), account.balance());
    assert_eq!(
        4,
        output
            .matches("@@@ Operation failed! The amount provided is invalid. @@@")
            .count()
    );
}

#[test]
fn withdrawal_guards() {
    let script = format!(
        "{ALICE}nc\n12345678901\nd\n1\n1000\n\
         s\n1\n600\n\
         s\n1\n2000\n\
         s\n1\n100\ns\n1\n100\ns\n1\n100\n\
         s\n1\n100\nq\n"
    );

    let (bank, output) = run(Bank::new(), &script);

    assert!(output.contains("exceeds the limit of R$ 500.00"));
    assert!(output.contains("Insufficient balance (R$ 1000.00) for a withdrawal of R$ 2000.00"));
    assert!(output.contains("The maximum number of withdrawals (3) has been reached."));
    assert_eq!(3, output.matches("=== Withdrawal completed successfully! ===").count());

    let account = bank.account(1).unwrap();
    assert_eq!("R$ 700.00", account.balance().to_string());
    assert_eq!(3, account.withdrawals());
    assert_eq!(4, account.statement().len());
}

#[test]
fn unknown_account_aborts_every_account_operation() {
    let script = format!("{ALICE}nc\n12345678901\nd\n2\ns\nabc\ne\n0\nq\n");

    let (bank, output) = run(Bank::new(), &script);

    assert!(output.contains("@@@ Account \"2\" not found! @@@"));
    assert!(output.contains("@@@ Account \"abc\" not found! @@@"));
    assert!(output.contains("@@@ Account \"0\" not found! @@@"));
    assert!(!output.contains("Enter the deposit amount: "));
    assert!(!output.contains("Enter the withdrawal amount: "));
    assert!(!output.contains("STATEMENT"));
    assert!(bank.account(1).unwrap().statement().is_empty());
}

#[test]
fn session_uses_the_limits_of_its_bank() {
    let limits = Limits {
        max_withdrawals: 1,
        ..Limits::default()
    };
    let script = format!("{ALICE}nc\n12345678901\nd\n1\n50\ns\n1\n10\ns\n1\n10\nq\n");

    let (bank, output) = run(Bank::with_limits(limits), &script);

    assert!(output.contains("The maximum number of withdrawals (1) has been reached."));
    assert_eq!("R$ 40.00", bank.account(1).unwrap().balance().to_string());
}

#[test]
fn closed_input_ends_the_session_with_an_error() {
    let console = Console::new(Cursor::new(b"lc\n".to_vec()), Vec::new());
    let mut session = Session::new(Bank::new(), console);

    let err = session.run().unwrap_err();

    assert_eq!(ErrorKind::UnexpectedEof, err.kind());
}

#[test]
fn deposit_overflow_is_reported_and_the_session_goes_on() {
    let max = "79228162514264337593543950335";
    let script = format!("{ALICE}nc\n12345678901\nd\n1\n{max}\nd\n1\n{max}\ne\n1\nq\n");

    let (bank, output) = run(Bank::new(), &script);

    assert!(output.contains(&format!(
        "@@@ Operation failed! A deposit of R$ {max}.00 would overflow the balance (R$ {max}.00). @@@"
    )));
    assert_eq!(1, output.matches("=== Deposit completed successfully! ===").count());
    assert!(output.ends_with("Leaving the system.\n"));

    let account = bank.account(1).unwrap();
    assert_eq!(1, account.statement().len());
    assert_eq!(format!("R$ {max}.00"), account.balance().to_string());
}

#[test]
fn garbled_command_loops_back_to_the_menu() {
    let console = Console::new(Cursor::new(b"l\xffc\nq\n".to_vec()), Vec::new());
    let mut session = Session::new(Bank::new(), console);

    session.run().unwrap();

    let (_, console) = session.into_parts();
    let output = String::from_utf8(console.into_output()).unwrap();
    assert!(output.contains("Invalid operation \"l\u{FFFD}c\""));
    assert!(output.ends_with("Leaving the system.\n"));
}
