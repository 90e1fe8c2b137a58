use models::FormValues;

use crate::{create_account, daily_check_in, initial_survey, login};

pub fn valid_login() -> FormValues {
    FormValues::new()
        .with(login::EMAIL, "a@b.com")
        .with(login::PASSWORD, "abc123")
}

pub fn valid_account() -> FormValues {
    FormValues::new()
        .with(create_account::FIRST_NAME, "Mary Ann")
        .with(create_account::LAST_NAME, "Smith")
        .with(create_account::EMAIL, "mary@example.com")
        .with(create_account::PASSWORD, "P@ssw0rd!")
        .with(create_account::PASSWORD_CONFIRMATION, "P@ssw0rd!")
}

pub fn valid_check_in() -> FormValues {
    FormValues::new()
        .with(daily_check_in::CALORIES, "2200")
        .with(daily_check_in::WATER_INTAKE, "2000")
        .with(daily_check_in::WEIGHT, "150")
        .with(daily_check_in::MOOD, "Tired but good")
}

pub fn valid_survey() -> FormValues {
    FormValues::new()
        .with(initial_survey::DATE_OF_BIRTH, "1992-06-15")
        .with(initial_survey::GENDER, "non-binary")
        .with(initial_survey::HEIGHT, "5'11''")
        .with(initial_survey::WEIGHT, "150")
        .with(initial_survey::FITNESS_GOAL, "Run a half marathon")
}
