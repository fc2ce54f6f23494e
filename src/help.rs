use crate::{Error, OptionDef, Registry};

/// Render the option listing.
///
/// With no order every option is listed in declaration order. Otherwise only
/// the named options are listed, and an empty name produces a blank line.
pub(crate) fn render(registry: &Registry, order: Option<&[&str]>) -> Result<String, Error> {
    // None stands for a blank line
    let rows: Vec<Option<&OptionDef>> = match order {
        None => registry.iter().map(Some).collect(),
        Some(order) => order
            .iter()
            .map(|&name| match name {
                "" => Ok(None),
                name => registry
                    .lookup(name)
                    .map(Some)
                    .ok_or_else(|| Error::UnknownHelpEntry { name: name.into() }),
            })
            .collect::<Result<_, _>>()?,
    };

    let heads: Vec<Option<String>> = rows.iter().map(|row| row.map(head)).collect();
    let width = heads.iter().flatten().map(|h| h.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Options:\n");
    for (row, head) in rows.iter().zip(&heads) {
        if let (Some(def), Some(head)) = (row, head) {
            let line = format!("  {:<width$}  {}", head, def.description(), width = width);
            out.push_str(line.trim_end());
        }
        out.push('\n');
    }
    Ok(out)
}

/// The left column, e.g. `-o, --output=TEXT` or `    --verbose`.
fn head(def: &OptionDef) -> String {
    let mut head = match def.short() {
        Some(short) => format!("-{}, --{}", short, def.long()),
        None => format!("    --{}", def.long()),
    };
    if let Some(kind) = def.value_kind() {
        head.push('=');
        head.push_str(kind.placeholder());
    }
    head
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ValueKind;

    fn registry() -> Result<Registry, Error> {
        let mut registry = Registry::new();
        registry.register(OptionDef::flag("help", "Display this help message").with_short('h'))?;
        registry.register(
            OptionDef::valued("input", "Input file name", ValueKind::Text).with_short('i'),
        )?;
        registry.register(OptionDef::valued("level", "", ValueKind::Integer))?;
        Ok(registry)
    }

    #[test]
    fn test_declaration_order() -> Result<(), Error> {
        let text = render(&registry()?, None)?;
        assert_eq!(
            text,
            "Options:\n\
             \x20 -h, --help        Display this help message\n\
             \x20 -i, --input=TEXT  Input file name\n\
             \x20     --level=INT\n"
        );
        Ok(())
    }

    #[test]
    fn test_explicit_order() -> Result<(), Error> {
        let text = render(&registry()?, Some(&["input", "", "help"][..]))?;
        assert_eq!(
            text,
            "Options:\n\
             \x20 -i, --input=TEXT  Input file name\n\
             \n\
             \x20 -h, --help        Display this help message\n"
        );
        Ok(())
    }

    #[test]
    fn test_unknown_entry() -> Result<(), Error> {
        match render(&registry()?, Some(&["help", "bogus"][..])) {
            Err(Error::UnknownHelpEntry { name }) => assert_eq!(name, "bogus"),
            _ => panic!(),
        }
        Ok(())
    }

    #[test]
    fn test_empty() -> Result<(), Error> {
        assert_eq!(render(&Registry::new(), None)?, "Options:\n");
        assert_eq!(render(&registry()?, Some(&[][..]))?, "Options:\n");
        Ok(())
    }
}
