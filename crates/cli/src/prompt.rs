//! Interactive fallback for parameters not given on the command line.

use anyhow::{Context, Result};
use inquire::CustomType;

pub const BANNER: &str = "\
=== FIND CLOSEST PAIR ===
You are going to create a coordinate plane by specifying the number of points and the bounds.
Points will be randomly generated within that bounds, and can only take integer values.
For relevant results, it is recommended that { number_of_points / (4(bounds * bounds)) < 0.5 } to
prevent collisions when generating random points for the board.
";

pub const BOUNDS_QUESTION: &str = "What is the bounds of the coordinate plane?";
pub const POINTS_QUESTION: &str = "How many random points should be generated (n > 2)?";

/// Fill in whichever of `bounds` / `num_points` is missing. Bounds are asked
/// for first; an answer that is already known is never asked for.
pub fn complete_params<B, N>(
    bounds: Option<u32>,
    num_points: Option<usize>,
    ask_bounds: B,
    ask_points: N,
) -> Result<(u32, usize)>
where
    B: FnOnce() -> Result<u32>,
    N: FnOnce() -> Result<usize>,
{
    let bounds = match bounds {
        Some(b) => b,
        None => ask_bounds()?,
    };
    let num_points = match num_points {
        Some(n) => n,
        None => ask_points()?,
    };
    Ok((bounds, num_points))
}

/// Prompt on the terminal for missing values, showing the banner once.
pub fn prompt_missing(bounds: Option<u32>, num_points: Option<usize>) -> Result<(u32, usize)> {
    if let (Some(b), Some(n)) = (bounds, num_points) {
        return Ok((b, n));
    }
    println!("{BANNER}");
    let params = complete_params(bounds, num_points, ask_bounds, ask_points)?;
    println!();
    Ok(params)
}

fn ask_bounds() -> Result<u32> {
    CustomType::<u32>::new(BOUNDS_QUESTION)
        .with_help_message("coordinates range over [-bounds, bounds]")
        .with_error_message("Please type a non-negative integer")
        .prompt()
        .context("reading bounds")
}

fn ask_points() -> Result<usize> {
    CustomType::<usize>::new(POINTS_QUESTION)
        .with_error_message("Please type a non-negative integer")
        .prompt()
        .context("reading number of points")
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::bail;
    use std::cell::RefCell;

    #[test]
    fn asks_bounds_then_points() {
        let order = RefCell::new(Vec::new());
        let got = complete_params(
            None,
            None,
            || {
                order.borrow_mut().push("bounds");
                Ok(25)
            },
            || {
                order.borrow_mut().push("points");
                Ok(40)
            },
        )
        .unwrap();
        assert_eq!(got, (25, 40));
        assert_eq!(*order.borrow(), vec!["bounds", "points"]);
    }

    #[test]
    fn known_values_are_not_asked() {
        let got = complete_params(
            Some(3),
            Some(9),
            || panic!("bounds already given"),
            || panic!("points already given"),
        )
        .unwrap();
        assert_eq!(got, (3, 9));

        let got = complete_params(Some(3), None, || panic!("bounds already given"), || Ok(12))
            .unwrap();
        assert_eq!(got, (3, 12));

        let got = complete_params(None, Some(5), || Ok(7), || panic!("points already given"))
            .unwrap();
        assert_eq!(got, (7, 5));
    }

    #[test]
    fn failed_answer_stops_before_next_question() {
        let err = complete_params(
            None,
            None,
            || bail!("input closed"),
            || panic!("must not ask for points after bounds failed"),
        )
        .unwrap_err();
        assert_eq!(err.to_string(), "input closed");
    }

    #[test]
    fn banner_mentions_density_advice() {
        assert!(BANNER.starts_with("=== FIND CLOSEST PAIR ==="));
        assert!(BANNER.contains("number_of_points / (4(bounds * bounds)) < 0.5"));
    }
}
