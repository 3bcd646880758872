use crate::session::{CliResult, Session};

pub fn run(text: Option<String>) -> CliResult {
    let mut session = Session::open()?;
    match text {
        Some(text) => {
            session.doc.set_slogan(text);
            session.commit()?;
            println!("ok");
        }
        None => println!("{}", session.doc.slogan),
    }
    session.close()
}
