pub use anyhow::{bail, Context, Error, Result};
pub use itertools::Itertools;

pub use aoc_runner::{parse_list, parse_string, parse_to, read_lines, Reader, Solver};
pub use common::{knot, HashMap, HashSet};

pub use std::{
    collections::VecDeque,
    fmt::{self, Display},
    str::FromStr,
};
