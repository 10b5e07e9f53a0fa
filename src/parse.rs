//! Input and result types shared by the coordinate grammars.

use nom::error::VerboseError;

pub type Input<'a> = &'a str;
pub type Result<'a, O> = nom::IResult<Input<'a>, O, VerboseError<Input<'a>>>;

/// Every way a grammar element can match at the head of the input, most preferred first. Each
/// entry holds the remaining input and the state reached along that path.
pub type Branches<'a, S> = Vec<(Input<'a>, S)>;

/// Run a nom parser as a single grammar element: `Some` with the remaining input and output on
/// success, `None` otherwise.
pub fn attempt<'a, O, P>(mut parser: P, i: Input<'a>) -> Option<(Input<'a>, O)>
where
    P: FnMut(Input<'a>) -> Result<'a, O>,
{
    parser(i).ok()
}

/// Try each parser at the head of the same input and collect every success, in the order the
/// parsers are listed.
#[macro_export]
macro_rules! alternatives {
    ($i: expr, $($parser: expr),+ $(,)?) => {{
        let i = $i;
        let mut branches = Vec::new();
        $(
            if let Some(branch) = $crate::parse::attempt($parser, i) {
                branches.push(branch);
            }
        )+
        branches
    }};
}

/// Render a nom error against the text it was produced from.
pub fn pretty_error_message(input: Input, err: nom::Err<VerboseError<Input>>) -> String {
    match err {
        nom::Err::Error(e) | nom::Err::Failure(e) => nom::error::convert_error(input, e),
        nom::Err::Incomplete(_) => "Incomplete input".to_string(),
    }
}
