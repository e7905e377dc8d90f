//! Interactive text menu for exploring a generated tree

use std::io::{self, BufRead, Write};

use crate::genealogy::{queries, FamilyTree};

/// A parsed menu selection
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    TotalPeople,
    PeopleByDecade,
    DuplicateNames,
    Exit,
}

impl MenuChoice {
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim() {
            "1" => Some(MenuChoice::TotalPeople),
            "2" => Some(MenuChoice::PeopleByDecade),
            "3" => Some(MenuChoice::DuplicateNames),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Menu loop over arbitrary input and output streams
pub struct Menu<'a, R, W> {
    tree: &'a FamilyTree,
    input: R,
    output: W,
}

impl<'a, R: BufRead, W: Write> Menu<'a, R, W> {
    pub fn new(tree: &'a FamilyTree, input: R, output: W) -> Self {
        Self { tree, input, output }
    }

    /// Run until the user exits or input ends.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            self.print_options()?;
            write!(self.output, "\n> ")?;
            self.output.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                writeln!(self.output, "\nExiting...")?;
                return Ok(());
            }

            match MenuChoice::parse(&line) {
                Some(MenuChoice::Exit) => {
                    writeln!(self.output, "Exiting...")?;
                    return Ok(());
                }
                Some(choice) => self.show(choice)?,
                None => writeln!(self.output, "Invalid choice. Please enter 1, 2, 3, or 4.")?,
            }
        }
    }

    fn print_options(&mut self) -> io::Result<()> {
        writeln!(self.output, "\n=== Family Tree Generator ===")?;
        writeln!(self.output, "1. Total number of people")?;
        writeln!(self.output, "2. People by decade")?;
        writeln!(self.output, "3. Duplicate names")?;
        writeln!(self.output, "4. Exit")
    }

    fn show(&mut self, choice: MenuChoice) -> io::Result<()> {
        match choice {
            MenuChoice::TotalPeople => write_total(&mut self.output, self.tree),
            MenuChoice::PeopleByDecade => write_decades(&mut self.output, self.tree),
            MenuChoice::DuplicateNames => write_duplicates(&mut self.output, self.tree),
            MenuChoice::Exit => Ok(()),
        }
    }
}

pub fn write_total(out: &mut impl Write, tree: &FamilyTree) -> io::Result<()> {
    writeln!(out, "\nThe tree contains {} people total", queries::total_people(tree))
}

pub fn write_decades(out: &mut impl Write, tree: &FamilyTree) -> io::Result<()> {
    writeln!(out, "\nPeople by decade:")?;
    for (decade, count) in queries::people_by_decade(tree) {
        writeln!(out, "{}: {}", decade, count)?;
    }
    Ok(())
}

pub fn write_duplicates(out: &mut impl Write, tree: &FamilyTree) -> io::Result<()> {
    let duplicates = queries::duplicate_names(tree);
    if duplicates.is_empty() {
        return writeln!(out, "\nThere are no duplicate names");
    }
    writeln!(out, "\nThere are {} duplicate names:", duplicates.len())?;
    for name in &duplicates {
        writeln!(out, "* {}", name)?;
    }
    Ok(())
}

/// Non-interactive dump of every query, used by `--report`.
pub fn write_report(out: &mut impl Write, tree: &FamilyTree) -> io::Result<()> {
    writeln!(out, "{}", queries::summary(tree))?;
    write_total(out, tree)?;
    write_decades(out, tree)?;
    write_duplicates(out, tree)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::genealogy::{DemographicData, GenerationConfig, GenerationEngine};

    fn tree() -> FamilyTree {
        let data = DemographicData::defaults().unwrap();
        GenerationEngine::new(7).generate(&data, &GenerationConfig::default())
    }

    fn run_menu(tree: &FamilyTree, input: &str) -> String {
        let mut out = Vec::new();
        Menu::new(tree, input.as_bytes(), &mut out).run().unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_parse_choice() {
        assert_eq!(MenuChoice::parse(" 1\n"), Some(MenuChoice::TotalPeople));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
        assert_eq!(MenuChoice::parse("5"), None);
        assert_eq!(MenuChoice::parse("exit"), None);
    }

    #[test]
    fn test_total_option() {
        let tree = tree();
        let text = run_menu(&tree, "1\n4\n");
        let expected = format!("The tree contains {} people total", tree.total_count());
        assert!(text.contains(&expected));
        assert!(text.trim_end().ends_with("Exiting..."));
    }

    #[test]
    fn test_decade_option_lists_founder_decade() {
        let tree = tree();
        let text = run_menu(&tree, "2\n4\n");
        assert!(text.contains("People by decade:"));
        assert!(text.contains("1950s: "));
    }

    #[test]
    fn test_invalid_input_reprompts() {
        let tree = tree();
        let text = run_menu(&tree, "9\nhello\n4\n");
        assert_eq!(text.matches("Invalid choice. Please enter 1, 2, 3, or 4.").count(), 2);
        assert_eq!(text.matches("=== Family Tree Generator ===").count(), 3);
    }

    #[test]
    fn test_end_of_input_exits() {
        let tree = tree();
        let text = run_menu(&tree, "");
        assert!(text.contains("Exiting..."));
    }

    #[test]
    fn test_duplicate_output() {
        let empty = FamilyTree::new();
        let mut out = Vec::new();
        write_duplicates(&mut out, &empty).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "\nThere are no duplicate names\n");

        let tree = tree();
        let duplicates = queries::duplicate_names(&tree);
        let mut out = Vec::new();
        write_duplicates(&mut out, &tree).unwrap();
        let text = String::from_utf8(out).unwrap();
        if !duplicates.is_empty() {
            assert!(text.contains(&format!("There are {} duplicate names:", duplicates.len())));
            assert_eq!(text.matches("\n* ").count(), duplicates.len());
        }
    }

    #[test]
    fn test_report_contains_every_section() {
        let tree = tree();
        let mut out = Vec::new();
        write_report(&mut out, &tree).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== Family Tree Summary ==="));
        assert!(text.contains("people total"));
        assert!(text.contains("People by decade:"));
        assert!(text.contains("duplicate names"));
    }
}
