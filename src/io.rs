//! Textual serialization of diagrams.
//!
//! # Format
//!
//! The two terminal families are written as a single marker line followed
//! by the terminator:
//!
//! ```text
//! B        T
//! .        .
//! ```
//!
//! Any other diagram is written as its node count, one line per node, and
//! the terminator:
//!
//! ```text
//! <count>
//! <id> <var> <lo> <hi>   # repeated <count> times
//! .
//! ```
//!
//! Nodes appear bottom-up (children before parents), numbered from 1, and
//! the last line is the root. `lo` and `hi` are `B`, `T` or the id of an
//! earlier line. Loading re-interns every node, so a tampered but
//! well-ordered file still yields the canonical diagram.

use std::collections::HashMap;
use std::fmt::Write as FmtWrite;
use std::fs;
use std::path::Path;

use log::debug;

use crate::error::{Error, Result};
use crate::reference::ZddId;
use crate::types::Var;
use crate::zdd::ZddManager;

// ─── Dump ───

impl ZddManager {
    /// Serializes `f`.
    ///
    /// # Example
    ///
    /// ```
    /// use digraph_zdd::zdd::ZddManager;
    ///
    /// let mgr = ZddManager::new(2);
    /// let f = mgr.base(2);
    /// assert_eq!(mgr.dump(f), "1\n1 2 B T\n.\n");
    /// ```
    pub fn dump(&self, f: ZddId) -> String {
        if f.is_zero() {
            return "B\n.\n".to_string();
        }
        if f.is_one() {
            return "T\n.\n".to_string();
        }

        let mut numbering: HashMap<ZddId, usize> = HashMap::new();
        let mut lines: Vec<String> = Vec::new();
        self.dump_node(f, &mut numbering, &mut lines);

        let mut output = String::new();
        writeln!(output, "{}", lines.len()).unwrap();
        for line in lines {
            output.push_str(&line);
        }
        output.push_str(".\n");
        debug!("Dumped {} nodes", numbering.len());
        output
    }

    fn dump_node(&self, f: ZddId, numbering: &mut HashMap<ZddId, usize>, lines: &mut Vec<String>) -> String {
        if f.is_zero() {
            return "B".to_string();
        }
        if f.is_one() {
            return "T".to_string();
        }
        if let Some(&id) = numbering.get(&f) {
            return id.to_string();
        }

        let node = self.node(f);
        let lo = self.dump_node(node.lo, numbering, lines);
        let hi = self.dump_node(node.hi, numbering, lines);

        let id = numbering.len() + 1;
        numbering.insert(f, id);
        lines.push(format!("{} {} {} {}\n", id, node.var.id(), lo, hi));
        id.to_string()
    }

    pub fn save<P: AsRef<Path>>(&self, f: ZddId, path: P) -> Result<()> {
        fs::write(path, self.dump(f))?;
        Ok(())
    }
}

// ─── Load ───

impl ZddManager {
    /// Parses a diagram written by [`dump`](ZddManager::dump).
    pub fn load(&self, content: &str) -> Result<ZddId> {
        let mut lines = content.lines().map(str::trim).filter(|line| !line.is_empty());

        let header = lines.next().ok_or_else(|| Error::Parse("missing header".into()))?;
        let root = match header {
            "B" => ZddId::ZERO,
            "T" => ZddId::ONE,
            _ => {
                let count: usize = header
                    .parse()
                    .map_err(|_| Error::Parse(format!("invalid node count: {}", header)))?;
                self.load_nodes(&mut lines, count)?
            }
        };

        match lines.next() {
            Some(".") => {}
            Some(line) => return Err(Error::Parse(format!("expected terminator, got: {}", line))),
            None => return Err(Error::Parse("missing terminator".into())),
        }

        debug!("Loaded diagram with {} nodes", self.node_count(root));
        Ok(root)
    }

    fn load_nodes<'a>(&self, lines: &mut impl Iterator<Item = &'a str>, count: usize) -> Result<ZddId> {
        if count == 0 {
            return Err(Error::Parse("empty node list".into()));
        }

        let mut ids: HashMap<&str, ZddId> = HashMap::new();
        let mut root = ZddId::ZERO;
        for _ in 0..count {
            let line = lines
                .next()
                .ok_or_else(|| Error::Parse(format!("expected {} nodes", count)))?;
            let parts: Vec<&str> = line.split_whitespace().collect();
            let [id, var, lo, hi] = parts[..] else {
                return Err(Error::Parse(format!("invalid node line: {}", line)));
            };

            let var: u32 = var
                .parse()
                .map_err(|_| Error::Parse(format!("invalid variable in: {}", line)))?;
            if var == 0 {
                return Err(Error::Malformed(format!("variable 0 in: {}", line)));
            }
            let lo = resolve(&ids, lo)?;
            let hi = resolve(&ids, hi)?;
            root = self.try_get_node(Var::from(var), lo, hi)?;
            if ids.insert(id, root).is_some() {
                return Err(Error::Parse(format!("duplicate node id: {}", id)));
            }
        }
        Ok(root)
    }

    pub fn load_file<P: AsRef<Path>>(&self, path: P) -> Result<ZddId> {
        let content = fs::read_to_string(path)?;
        self.load(&content)
    }
}

fn resolve(ids: &HashMap<&str, ZddId>, token: &str) -> Result<ZddId> {
    match token {
        "B" => Ok(ZddId::ZERO),
        "T" => Ok(ZddId::ONE),
        _ => ids
            .get(token)
            .copied()
            .ok_or_else(|| Error::Parse(format!("unknown node reference: {}", token))),
    }
}
