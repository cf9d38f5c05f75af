//! Recursive descent over Glass source.
//!
//! Grammar, with trivia (whitespace and `'comments'`) allowed between items:
//!
//! ```text
//! program := class*
//! class   := '{' name (name | method)* '}'        names after the first are parents
//! method  := '[' name command* ']'
//! name    := LETTER | '(' ident ')'
//! command := LETTER | DIGIT | '(' ident ')' | '(' digits ')'
//!          | '"' bytes '"' | '<' number '>' | '/' name | '\'
//!          | '=' | '$' | '?' | '.' | '*' | '!' | ',' | '^'
//! ```

use glass_ir::{Command, GlassFunction, Instruction, Name, SourceLoc};

use crate::cursor::Cursor;
use crate::ParseError;

/// A class as written, before inheritance is resolved.
#[derive(Clone, Debug, PartialEq)]
pub struct ClassDecl {
    pub name: Name,
    /// Parent classes in declaration order.
    pub parents: Vec<(Name, SourceLoc)>,
    /// Methods in declaration order; duplicates are kept for the loader to
    /// report.
    pub methods: Vec<GlassFunction>,
    pub loc: SourceLoc,
}

/// Parse one source file into class declarations.
#[tracing::instrument(level = "debug", skip(source))]
pub fn parse_source(file: &str, source: &str) -> Result<Vec<ClassDecl>, ParseError> {
    let mut parser = Parser {
        cursor: Cursor::new(Name::new(file), source),
    };
    let mut classes = Vec::new();
    loop {
        parser.cursor.skip_trivia();
        if parser.cursor.is_eof() {
            break;
        }
        classes.push(parser.class()?);
    }
    tracing::debug!(file, classes = classes.len(), "parsed source");
    Ok(classes)
}

struct Parser<'a> {
    cursor: Cursor<'a>,
}

impl Parser<'_> {
    fn unexpected(&self, found: u8, expected: &'static str) -> ParseError {
        ParseError::UnexpectedChar {
            found: char::from(found),
            expected,
            loc: self.cursor.loc(),
        }
    }

    fn eof(&self, context: &'static str) -> ParseError {
        ParseError::UnexpectedEof {
            context,
            loc: self.cursor.loc(),
        }
    }

    fn expect(&mut self, byte: u8, expected: &'static str) -> Result<(), ParseError> {
        self.cursor.skip_trivia();
        match self.cursor.peek() {
            Some(found) if found == byte => {
                self.cursor.bump();
                Ok(())
            }
            Some(found) => Err(self.unexpected(found, expected)),
            None => Err(self.eof(expected)),
        }
    }

    fn class(&mut self) -> Result<ClassDecl, ParseError> {
        let loc = self.cursor.loc();
        self.expect(b'{', "'{' to start a class")?;
        self.cursor.skip_trivia();
        let name = self.name("a class name")?;

        let mut parents = Vec::new();
        let mut methods = Vec::new();
        loop {
            self.cursor.skip_trivia();
            match self.cursor.peek() {
                Some(b'}') => {
                    self.cursor.bump();
                    break;
                }
                Some(b'[') => methods.push(self.method()?),
                Some(b'(') => {
                    let parent_loc = self.cursor.loc();
                    parents.push((self.name("a parent class name")?, parent_loc));
                }
                Some(byte) if byte.is_ascii_alphabetic() => {
                    let parent_loc = self.cursor.loc();
                    parents.push((self.name("a parent class name")?, parent_loc));
                }
                Some(byte) => return Err(self.unexpected(byte, "a method, parent or '}'")),
                None => return Err(self.eof("a class body")),
            }
        }

        Ok(ClassDecl {
            name,
            parents,
            methods,
            loc,
        })
    }

    fn method(&mut self) -> Result<GlassFunction, ParseError> {
        let loc = self.cursor.loc();
        self.expect(b'[', "'[' to start a method")?;
        self.cursor.skip_trivia();
        let name = self.name("a method name")?;

        let mut body = MethodBody::default();
        loop {
            self.cursor.skip_trivia();
            let cmd_loc = self.cursor.loc();
            let Some(byte) = self.cursor.peek() else {
                return Err(self.eof("a method body"));
            };
            let command = match byte {
                b']' => {
                    self.cursor.bump();
                    break;
                }
                b'(' => self.parenthesized()?,
                b'"' => self.string()?,
                b'<' => self.number()?,
                b'/' => {
                    self.cursor.bump();
                    self.cursor.skip_trivia();
                    let name = self.name("a loop condition name")?;
                    body.begin_loop(name, cmd_loc);
                    continue;
                }
                b'\\' => {
                    self.cursor.bump();
                    body.end_loop(cmd_loc)?;
                    continue;
                }
                b if b.is_ascii_alphabetic() => {
                    self.cursor.bump();
                    Command::PushName(Name::new(&char::from(b).to_string()))
                }
                b if b.is_ascii_digit() => {
                    self.cursor.bump();
                    Command::Duplicate(usize::from(b - b'0'))
                }
                other => {
                    let Some(command) = simple_command(other) else {
                        return Err(self.unexpected(other, "a command or ']'"));
                    };
                    self.cursor.bump();
                    command
                }
            };
            body.push(command, cmd_loc);
        }

        Ok(GlassFunction::new(name, body.finish()?, loc))
    }

    /// A single letter or a parenthesized identifier.
    fn name(&mut self, expected: &'static str) -> Result<Name, ParseError> {
        match self.cursor.peek() {
            Some(b'(') => match self.parenthesized()? {
                Command::PushName(name) => Ok(name),
                _ => Err(ParseError::UnexpectedChar {
                    found: '(',
                    expected,
                    loc: self.cursor.loc(),
                }),
            },
            Some(byte) if byte.is_ascii_alphabetic() => {
                self.cursor.bump();
                Ok(Name::new(&char::from(byte).to_string()))
            }
            Some(byte) => Err(self.unexpected(byte, expected)),
            None => Err(self.eof(expected)),
        }
    }

    /// `(ident)` pushes a name, `(digits)` duplicates.
    fn parenthesized(&mut self) -> Result<Command, ParseError> {
        let loc = self.cursor.loc();
        self.cursor.bump();
        let mut text = String::new();
        loop {
            match self.cursor.peek() {
                Some(b')') => {
                    self.cursor.bump();
                    break;
                }
                Some(byte) if byte.is_ascii_alphanumeric() || byte == b'_' => {
                    self.cursor.bump();
                    text.push(char::from(byte));
                }
                Some(byte) => {
                    return Err(ParseError::InvalidNameChar {
                        found: char::from(byte),
                        loc: self.cursor.loc(),
                    })
                }
                None => return Err(self.eof("a parenthesized name")),
            }
        }

        if text.is_empty() {
            return Err(ParseError::UnexpectedChar {
                found: ')',
                expected: "a name or a number",
                loc,
            });
        }
        if text.bytes().all(|b| b.is_ascii_digit()) {
            return text
                .parse()
                .map(Command::Duplicate)
                .map_err(|_| ParseError::InvalidNumber { text, loc });
        }
        if text.as_bytes()[0].is_ascii_digit() {
            return Err(ParseError::InvalidNameChar {
                found: char::from(text.as_bytes()[0]),
                loc,
            });
        }
        Ok(Command::PushName(Name::from(text)))
    }

    /// `"..."` with `\n`, `\t`, `\r` escapes; any other escaped byte stands
    /// for itself.
    fn string(&mut self) -> Result<Command, ParseError> {
        self.cursor.bump();
        let mut bytes = Vec::new();
        loop {
            match self.cursor.bump() {
                Some(b'"') => break,
                Some(b'\\') => match self.cursor.bump() {
                    Some(b'n') => bytes.push(b'\n'),
                    Some(b't') => bytes.push(b'\t'),
                    Some(b'r') => bytes.push(b'\r'),
                    Some(other) => bytes.push(other),
                    None => return Err(self.eof("a string literal")),
                },
                Some(byte) => bytes.push(byte),
                None => return Err(self.eof("a string literal")),
            }
        }
        Ok(Command::PushStr(bytes))
    }

    fn number(&mut self) -> Result<Command, ParseError> {
        let loc = self.cursor.loc();
        self.cursor.bump();
        let mut text = String::new();
        loop {
            match self.cursor.bump() {
                Some(b'>') => break,
                Some(byte) => text.push(char::from(byte)),
                None => return Err(self.eof("a number literal")),
            }
        }
        let value: f64 = text
            .trim()
            .parse()
            .map_err(|_| ParseError::InvalidNumber {
                text: text.clone(),
                loc,
            })?;
        Ok(Command::PushNum(value))
    }
}

fn simple_command(byte: u8) -> Option<Command> {
    Some(match byte {
        b'=' => Command::AssignVal,
        b'$' => Command::AssignSelf,
        b'?' => Command::ExecuteFunc,
        b'.' => Command::GetFunc,
        b'*' => Command::GetVal,
        b'!' => Command::NewInst,
        b',' => Command::PopStack,
        b'^' => Command::Return,
        _ => return None,
    })
}

/// Instruction list under construction, with open loops awaiting their end.
#[derive(Default)]
struct MethodBody {
    instructions: Vec<Instruction>,
    open_loops: Vec<usize>,
}

impl MethodBody {
    fn push(&mut self, command: Command, loc: SourceLoc) {
        self.instructions.push(Instruction::new(command, loc));
    }

    fn begin_loop(&mut self, name: Name, loc: SourceLoc) {
        self.open_loops.push(self.instructions.len());
        // End index patched when the matching `\` is seen.
        self.push(Command::LoopBegin { name, end: 0 }, loc);
    }

    /// Close the innermost loop. The end jumps back to the begin index and
    /// the begin skips to the end index, whose condition re-test then fails.
    fn end_loop(&mut self, loc: SourceLoc) -> Result<(), ParseError> {
        let begin = self
            .open_loops
            .pop()
            .ok_or(ParseError::UnmatchedLoopEnd { loc: loc.clone() })?;
        let end_index = self.instructions.len();
        let name = match &mut self.instructions[begin].command {
            Command::LoopBegin { name, end } => {
                *end = end_index;
                name.clone()
            }
            _ => return Err(ParseError::UnmatchedLoopEnd { loc }),
        };
        self.push(Command::LoopEnd { name, begin }, loc);
        Ok(())
    }

    fn finish(self) -> Result<Vec<Instruction>, ParseError> {
        if let Some(&begin) = self.open_loops.last() {
            let open = &self.instructions[begin];
            let name = match &open.command {
                Command::LoopBegin { name, .. } => name.clone(),
                _ => Name::new(""),
            };
            return Err(ParseError::UnclosedLoop {
                name,
                loc: open.loc.clone(),
            });
        }
        Ok(self.instructions)
    }
}
