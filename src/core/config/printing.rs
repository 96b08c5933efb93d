use crate::core::config::data::Config;
use std::io::{self, Write};

impl Config {
    pub fn write_all(&self, out: &mut dyn Write) -> io::Result<()> {
        writeln!(out, "Current configuration:")?;
        if self.scope.is_empty() {
            writeln!(out, "  scopes: (none set)")?;
        }
        for (path, entries) in &self.scope {
            writeln!(out, "  {path}:")?;
            if entries.is_empty() {
                writeln!(out, "    (empty)")?;
            }
            for (key, value) in entries {
                writeln!(out, "    {key}: {value}")?;
            }
        }
        if !self.shortcuts.is_empty() {
            writeln!(out, "  shortcuts:")?;
            for (name, expansion) in &self.shortcuts {
                writeln!(out, "    {name}: {}", expansion.join(" "))?;
            }
        }
        Ok(())
    }
}
