/// CLI Commands

pub const DEPOSIT: &str = "d";
pub const WITHDRAW: &str = "s";
pub const STATEMENT: &str = "e";
pub const NEW_ACCOUNT: &str = "nc";
pub const LIST_ACCOUNTS: &str = "lc";
pub const NEW_USER: &str = "nu";
pub const QUIT: &str = "q";

/// Prompts

pub const MENU_PROMPT: &str = "=> ";
pub const CPF_PROMPT: &str = "Enter the CPF (numbers only): ";
pub const OWNER_CPF_PROMPT: &str = "Enter the user's CPF: ";
pub const FULL_NAME_PROMPT: &str = "Enter the full name: ";
pub const BIRTH_DATE_PROMPT: &str = "Enter the date of birth (dd-mm-yyyy): ";
pub const ADDRESS_PROMPT: &str =
    "Enter the address (street, number - neighborhood - city/state abbreviation): ";
pub const ACCOUNT_NUMBER_PROMPT: &str = "Enter the account number: ";
pub const DEPOSIT_PROMPT: &str = "Enter the deposit amount: ";
pub const WITHDRAW_PROMPT: &str = "Enter the withdrawal amount: ";

/// Messages

pub const USER_CREATED: &str = "User created successfully!";
pub const ACCOUNT_CREATED: &str = "Account created successfully!";
pub const DEPOSIT_DONE: &str = "Deposit completed successfully!";
pub const WITHDRAW_DONE: &str = "Withdrawal completed successfully!";
pub const NO_ACCOUNTS: &str = "No accounts registered.";
pub const NO_TRANSACTIONS: &str = "No transactions were made.";
pub const GOODBYE: &str = "Leaving the system.";

/// Decorations

pub const MENU_HEADER: &str = "================ MENU ================";
pub const STATEMENT_HEADER: &str = "================ STATEMENT ================";
pub const STATEMENT_FOOTER: &str = "==========================================";
pub const LISTING_SEPARATOR_WIDTH: usize = 100;
