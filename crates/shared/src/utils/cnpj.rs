use regex::Regex;
use std::sync::LazyLock;

// digits, optionally punctuated as 00.000.000/0000-00 or 000.000.000-00
static DOCUMENTO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d{14}|\d{11}|\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}|\d{3}\.\d{3}\.\d{3}-\d{2})$")
        .expect("static regex")
});

const PESOS_CNPJ_1: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const PESOS_CNPJ_2: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const PESOS_CPF_1: [u32; 9] = [10, 9, 8, 7, 6, 5, 4, 3, 2];
const PESOS_CPF_2: [u32; 10] = [11, 10, 9, 8, 7, 6, 5, 4, 3, 2];

pub fn only_digits(value: &str) -> String {
    value.chars().filter(char::is_ascii_digit).collect()
}

/// Accepts a 14-digit CNPJ or an 11-digit CPF, with or without punctuation,
/// whose check digits match.
pub fn is_valid_cnpj(value: &str) -> bool {
    let value = value.trim();

    if !DOCUMENTO.is_match(value) {
        return false;
    }

    let digits: Vec<u32> = value.chars().filter_map(|c| c.to_digit(10)).collect();

    if digits.iter().all(|d| *d == digits[0]) {
        return false;
    }

    match digits.len() {
        14 => check_digits(&digits, &PESOS_CNPJ_1, &PESOS_CNPJ_2),
        11 => check_digits(&digits, &PESOS_CPF_1, &PESOS_CPF_2),
        _ => false,
    }
}

fn check_digits(digits: &[u32], first: &[u32], second: &[u32]) -> bool {
    let dv1 = digit_for(&digits[..first.len()], first);
    let dv2 = digit_for(&digits[..second.len()], second);

    digits[first.len()] == dv1 && digits[second.len()] == dv2
}

fn digit_for(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();

    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}
