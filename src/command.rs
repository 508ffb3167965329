//! Text commands, one per line, the way a user types them into a visualizer's input box.
//!
//! ```
//! use bst::command::Command;
//! use bst::traversal::Order;
//!
//! assert_eq!("insert 5, 3 8".parse::<Command>().unwrap(), Command::Insert(vec![5, 3, 8]));
//! assert_eq!("print".parse::<Command>().unwrap(), Command::Traverse(Order::PreOrder));
//! assert!("insert five".parse::<Command>().is_err());
//! ```

use std::fmt;
use std::str::FromStr;

use crate::error::Error;
use crate::traversal::Order;

/// Something to do to a tree of integer keys.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Insert one key, or a batch of keys in order.
    Insert(Vec<i64>),
    /// Delete a key.
    Delete(i64),
    /// Look a key up.
    Find(i64),
    /// List every key in the given order.
    Traverse(Order),
    /// Remove everything.
    Clear,
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Command::Insert(keys) => {
                f.write_str("insert")?;
                for key in keys {
                    write!(f, " {}", key)?;
                }
                Ok(())
            }
            Command::Delete(key) => write!(f, "delete {}", key),
            Command::Find(key) => write!(f, "find {}", key),
            Command::Traverse(order) => write!(f, "traverse {}", order),
            Command::Clear => f.write_str("clear"),
        }
    }
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut words = s
            .split(|c: char| c.is_whitespace() || c == ',')
            .filter(|word| !word.is_empty());
        let verb = words
            .next()
            .ok_or_else(|| Error::InvalidInput("empty command".to_string()))?;
        let args: Vec<&str> = words.collect();

        match verb.to_ascii_lowercase().as_str() {
            "insert" | "add" | "i" => {
                if args.is_empty() {
                    return Err(Error::InvalidInput(format!("{} needs at least one key", verb)));
                }
                args.iter()
                    .map(|arg| parse_key(arg))
                    .collect::<Result<Vec<_>, _>>()
                    .map(Command::Insert)
            }
            "delete" | "remove" | "del" | "d" => single_key(verb, &args).map(Command::Delete),
            "find" | "search" | "f" => single_key(verb, &args).map(Command::Find),
            "traverse" | "print" | "t" | "p" => match args.as_slice() {
                [] => Ok(Command::Traverse(Order::PreOrder)),
                [order] => order.parse::<Order>().map(Command::Traverse),
                _ => Err(too_many(verb)),
            },
            "clear" | "reset" => {
                if args.is_empty() {
                    Ok(Command::Clear)
                } else {
                    Err(too_many(verb))
                }
            }
            _ => Err(Error::InvalidInput(format!("unknown command: {}", verb))),
        }
    }
}

fn parse_key(arg: &str) -> Result<i64, Error> {
    arg.parse()
        .map_err(|_| Error::InvalidInput(format!("not an integer: {}", arg)))
}

fn single_key(verb: &str, args: &[&str]) -> Result<i64, Error> {
    match args {
        [key] => parse_key(key),
        [] => Err(Error::InvalidInput(format!("{} needs a key", verb))),
        _ => Err(too_many(verb)),
    }
}

fn too_many(verb: &str) -> Error {
    Error::InvalidInput(format!("too many arguments for {}", verb))
}
