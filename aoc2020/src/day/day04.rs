use crate::prelude::*;
use lazy_static::lazy_static;
use maplit::hashset;
use regex::Regex;

pub struct Answer;

pub type Passport = HashMap<String, String>;

const REQUIRED: [&str; 7] = ["byr", "iyr", "eyr", "hgt", "hcl", "ecl", "pid"];

lazy_static! {
    static ref HAIR: Regex = Regex::new(r"^#[0-9a-f]{6}$").unwrap();
    static ref PID: Regex = Regex::new(r"^[0-9]{9}$").unwrap();
    static ref EYE_COLORS: std::collections::HashSet<&'static str> =
        hashset! {"amb", "blu", "brn", "gry", "grn", "hzl", "oth"};
}

impl Solver for Answer {
    type Input = Vec<Passport>;
    type Output1 = usize;
    type Output2 = usize;

    /// Passports are blank-line-separated blocks of `key:value` fields.
    fn parse_input<R: Reader>(&self, r: R) -> Self::Input {
        parse_string(r)
            .split("\n\n")
            .map(|block| {
                block
                    .split_whitespace()
                    .map(|field| {
                        let (key, value) =
                            field.split_once(':').expect("malformed passport field");
                        (key.to_owned(), value.to_owned())
                    })
                    .collect()
            })
            .collect()
    }

    fn solve_first(&self, input: &Self::Input) -> Self::Output1 {
        input.iter().filter(|p| complete(p)).count()
    }

    fn solve_second(&self, input: &Self::Input) -> Self::Output2 {
        input
            .iter()
            .filter(|p| complete(p) && p.iter().all(|(k, v)| field_valid(k, v)))
            .count()
    }
}

fn complete(passport: &Passport) -> bool {
    REQUIRED.iter().all(|&key| passport.contains_key(key))
}

fn field_valid(key: &str, value: &str) -> bool {
    fn year_in(value: &str, lo: u32, hi: u32) -> bool {
        value.parse::<u32>().map_or(false, |y| (lo..=hi).contains(&y))
    }

    match key {
        "byr" => year_in(value, 1920, 2002),
        "iyr" => year_in(value, 2010, 2020),
        "eyr" => year_in(value, 2020, 2030),
        "hgt" => match value.split_at(value.len().saturating_sub(2)) {
            (n, "cm") => n.parse::<u32>().map_or(false, |h| (150..=193).contains(&h)),
            (n, "in") => n.parse::<u32>().map_or(false, |h| (59..=76).contains(&h)),
            _ => false,
        },
        "hcl" => HAIR.is_match(value),
        "ecl" => EYE_COLORS.contains(value),
        "pid" => PID.is_match(value),
        "cid" => true,
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn part_one() {
        let batch = "ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in";
        let passports = Answer.parse_input(Cursor::new(batch));
        assert_eq!(Answer.solve_first(&passports), 2);
    }

    #[test]
    fn part_two_rejects_every_invalid_passport() {
        let batch = "eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007";
        let passports = Answer.parse_input(Cursor::new(batch));
        assert_eq!(Answer.solve_second(&passports), 0);
    }

    #[test]
    fn part_two_accepts_every_valid_passport() {
        let batch = "pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719";
        let passports = Answer.parse_input(Cursor::new(batch));
        assert_eq!(Answer.solve_second(&passports), 4);
    }

    #[test]
    fn height_requires_units() {
        assert!(field_valid("hgt", "60in"));
        assert!(field_valid("hgt", "190cm"));
        assert!(!field_valid("hgt", "190in"));
        assert!(!field_valid("hgt", "190"));
    }
}
