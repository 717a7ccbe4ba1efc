//! Menu choices

use std::str::FromStr;

use crate::error::CliError;

/// Options shown before login
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MainMenuChoice {
    Register,
    Login,
    Exit,
}

impl MainMenuChoice {
    pub const TEXT: &'static str = "\n1. Register\n2. Login\n3. Exit\n";
}

impl FromStr for MainMenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_option(s)? {
            1 => Ok(MainMenuChoice::Register),
            2 => Ok(MainMenuChoice::Login),
            3 => Ok(MainMenuChoice::Exit),
            _ => Err(invalid_choice()),
        }
    }
}

/// Options shown once logged in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountMenuChoice {
    OpenAccount,
    Deposit,
    Withdraw,
    GenerateStatement,
    CalculateInterest,
    CheckBalance,
    Logout,
}

impl AccountMenuChoice {
    pub const TEXT: &'static str = "\n1. Open Account\n2. Deposit\n3. Withdraw\n4. Generate Statement\n5. Calculate Interest\n6. Check Balance\n7. Logout\n";
}

impl FromStr for AccountMenuChoice {
    type Err = CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match parse_option(s)? {
            1 => Ok(AccountMenuChoice::OpenAccount),
            2 => Ok(AccountMenuChoice::Deposit),
            3 => Ok(AccountMenuChoice::Withdraw),
            4 => Ok(AccountMenuChoice::GenerateStatement),
            5 => Ok(AccountMenuChoice::CalculateInterest),
            6 => Ok(AccountMenuChoice::CheckBalance),
            7 => Ok(AccountMenuChoice::Logout),
            _ => Err(invalid_choice()),
        }
    }
}

fn parse_option(s: &str) -> Result<u8, CliError> {
    s.trim().parse::<u8>().map_err(|_| invalid_choice())
}

fn invalid_choice() -> CliError {
    CliError::InvalidChoice
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_main_menu_choices() {
        assert_eq!("1".parse::<MainMenuChoice>().unwrap(), MainMenuChoice::Register);
        assert_eq!(" 3\n".parse::<MainMenuChoice>().unwrap(), MainMenuChoice::Exit);
        assert!("4".parse::<MainMenuChoice>().is_err());
        assert!("one".parse::<MainMenuChoice>().is_err());
    }

    #[test]
    fn test_account_menu_choices() {
        assert_eq!("5".parse::<AccountMenuChoice>().unwrap(), AccountMenuChoice::CalculateInterest);
        assert_eq!("7".parse::<AccountMenuChoice>().unwrap(), AccountMenuChoice::Logout);
        assert!("0".parse::<AccountMenuChoice>().is_err());
    }
}
