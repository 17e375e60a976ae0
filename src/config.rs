use alloc::string::String;
use alloc::vec::Vec;

#[cfg(feature = "debug")]
use log::debug;

use crate::{canonical, ArgumentTable};
#[cfg(feature = "std")]
use crate::Error;

fn split_line(line: &str) -> (&str, &str) {
    match line.find('=') {
        Some(i) => (canonical(line[..i].trim_end()), line[i + 1..].trim_start()),
        None => (canonical(line), ""),
    }
}

impl ArgumentTable {
    /// Layers `name=value` lines from a config file beneath what is already in the table.
    ///
    /// Blank lines, `#` comments and `[section]` headers are skipped, and leading dashes on names are
    /// optional. A name the table already holds, directly or through its `-no` form, is ignored entirely so
    /// the command line always wins. Otherwise every occurrence is kept in file order.
    pub fn merge_config(&mut self, contents: &str) {
        let mut layer = ArgumentTable::default();
        for line in contents.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            if line.starts_with('[') && line.ends_with(']') {
                debug!("ignoring section header {}", line);
                continue;
            }
            let (name, value) = split_line(line);
            layer.record(name, value);
        }

        let ArgumentTable { mut values, order, .. } = layer;
        // decided against the table as it was before this file, so a file may hold both `x` and `nox`
        let accepted: Vec<String> = order
            .into_iter()
            .filter(|name| {
                let claimed = self.claims(name);
                if claimed {
                    debug!("config key {} already given on the command line", name);
                }
                !claimed
            })
            .collect();
        for name in accepted {
            if let Some(layered) = values.remove(&name) {
                debug!("using config value for {}", name);
                self.order.push(name.clone());
                self.values.insert(name, layered);
            }
        }
    }

    /// Reads the config file at `path` and merges it with [`ArgumentTable::merge_config`].
    #[cfg(feature = "std")]
    pub fn read_config_file<P: AsRef<std::path::Path>>(&mut self, path: P) -> Result<(), Error> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => Error::ConfigNotFound(path.display().to_string()),
            _ => Error::ConfigUnreadable(path.display().to_string(), e.to_string()),
        })?;
        debug!("merging config file {}", path.display());
        self.merge_config(&contents);
        Ok(())
    }
}
