//! The `/solve` endpoint: parse a puzzle grid, solve it, report the outcome.
//!
//! Requests carry the grid as JSON, either as nine rows of nine values or as
//! a flat row-major list of 81 values, with 0 for empty cells. Responses:
//!
//! - `200` with `{"solution": [[...]]}` when a solution exists
//! - `400` with `{"error": "invalid_grid", "message": ...}` for malformed
//!   grids (wrong shape, out-of-range values, duplicate digits)
//! - `422` with `{"error": "no_solution", "message": ...}` when the grid is
//!   well-formed but has no completion

use axum::{
    Json, Router,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use nanpure_core::{Grid, InvalidGrid};
use nanpure_solver::PuzzleSolver;
use serde::{Deserialize, Serialize};

pub(crate) const PATH: &str = "/solve";

pub(crate) fn router() -> Router {
    Router::new().route("/", post(post_solve))
}

#[derive(Debug, Deserialize)]
struct SolveRequest {
    grid: GridDto,
}

/// A puzzle grid in either accepted wire shape.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum GridDto {
    Rows(Vec<Vec<u8>>),
    Cells(Vec<u8>),
}

#[derive(Debug, Serialize)]
struct SolutionBody {
    solution: [[u8; 9]; 9],
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: &'static str,
    message: String,
}

impl GridDto {
    fn into_grid(self) -> Result<Grid, InvalidGrid> {
        match self {
            Self::Rows(rows) => {
                if rows.len() != 9 {
                    return Err(InvalidGrid::WrongRowCount { len: rows.len() });
                }
                for (row, cells) in rows.iter().enumerate() {
                    if cells.len() != 9 {
                        return Err(InvalidGrid::WrongRowLength {
                            row,
                            len: cells.len(),
                        });
                    }
                }
                let cells = rows.into_iter().flatten().collect::<Vec<_>>();
                Grid::from_cells(&cells)
            }
            Self::Cells(cells) => Grid::from_cells(&cells),
        }
    }
}

async fn post_solve(Json(request): Json<SolveRequest>) -> Response {
    let grid = match request.grid.into_grid() {
        Ok(grid) => grid,
        Err(err) => return invalid_grid_response(&err),
    };
    let mut solver = match PuzzleSolver::new(grid) {
        Ok(solver) => solver,
        Err(err) => return invalid_grid_response(&err),
    };

    // The search can take a while on adversarial puzzles; keep it off the
    // async worker threads.
    match tokio::task::spawn_blocking(move || solver.solve()).await {
        Ok(Ok(solution)) => {
            log::debug!("Solved puzzle");
            (
                StatusCode::OK,
                Json(SolutionBody {
                    solution: solution.to_rows(),
                }),
            )
                .into_response()
        }
        Ok(Err(err)) => {
            log::debug!("Puzzle has no solution");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(ErrorBody {
                    error: "no_solution",
                    message: err.to_string(),
                }),
            )
                .into_response()
        }
        Err(err) => {
            log::error!("Solver task failed: {err}");
            StatusCode::INTERNAL_SERVER_ERROR.into_response()
        }
    }
}

fn invalid_grid_response(err: &InvalidGrid) -> Response {
    log::debug!("Rejected grid: {err}");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorBody {
            error: "invalid_grid",
            message: err.to_string(),
        }),
    )
        .into_response()
}
