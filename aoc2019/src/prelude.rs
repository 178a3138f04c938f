pub use anyhow::{bail, Context, Error, Result};
pub use itertools::Itertools;

pub use aoc_runner::{parse_list, parse_string, parse_to, read_lines, Reader, Solver};
pub use common::{HashMap, HashSet};

pub use std::{
    fmt::{self, Display},
    str::FromStr,
};
