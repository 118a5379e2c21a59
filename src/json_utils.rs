//! Messages JSON échangés avec le simulateur.
//!
//! ```text
//! {"SenseWalls": {"x": 0, "y": 0}}        -> {"Walls": {"north": false, "east": true, ...}}
//! {"Action": "MoveForward"}               -> {"ActionResult": "Ok"}
//! {"SetWall": {"x": 0, "y": 0, "side": "n"}} -> {"ActionResult": "Ok"}
//! ```
//!
//! Toute requête refusée reçoit `{"ActionError": "<raison>"}`.

use serde_json::{json, Value};

use crate::direction::Direction;
use crate::walls::Walls;

/// Raison renvoyée quand le robot heurte un mur.
pub const CANNOT_PASS_THROUGH_WALL: &str = "CannotPassThroughWall";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Request {
    SenseWalls { x: i32, y: i32 },
    MoveForward,
    TurnLeft,
    TurnRight,
    SetWall { x: i32, y: i32, side: Direction },
}

impl Request {
    pub fn to_json(self) -> Value {
        match self {
            Request::SenseWalls { x, y } => json!({ "SenseWalls": { "x": x, "y": y } }),
            Request::MoveForward => json!({ "Action": "MoveForward" }),
            Request::TurnLeft => json!({ "Action": "TurnLeft" }),
            Request::TurnRight => json!({ "Action": "TurnRight" }),
            Request::SetWall { x, y, side } => {
                json!({ "SetWall": { "x": x, "y": y, "side": side.letter() } })
            }
        }
    }

    pub fn from_json(json: &Value) -> Option<Self> {
        if let Some(sense) = json.get("SenseWalls") {
            let (x, y) = extract_position(sense)?;
            return Some(Request::SenseWalls { x, y });
        }
        if let Some(set_wall) = json.get("SetWall") {
            let (x, y) = extract_position(set_wall)?;
            let side = Direction::from_letter(set_wall.get("side")?.as_str()?)?;
            return Some(Request::SetWall { x, y, side });
        }
        match json.get("Action")?.as_str()? {
            "MoveForward" => Some(Request::MoveForward),
            "TurnLeft" => Some(Request::TurnLeft),
            "TurnRight" => Some(Request::TurnRight),
            _ => None,
        }
    }
}

pub fn parse_json(msg: &str) -> Result<Value, serde_json::Error> {
    serde_json::from_str(msg)
}

fn extract_position(json: &Value) -> Option<(i32, i32)> {
    let x = i32::try_from(json.get("x")?.as_i64()?).ok()?;
    let y = i32::try_from(json.get("y")?.as_i64()?).ok()?;
    Some((x, y))
}

pub fn walls_response(walls: &Walls) -> Value {
    json!({
        "Walls": {
            "north": walls.north,
            "east": walls.east,
            "south": walls.south,
            "west": walls.west
        }
    })
}

pub fn ok_response() -> Value {
    json!({ "ActionResult": "Ok" })
}

pub fn error_response(reason: &str) -> Value {
    json!({ "ActionError": reason })
}

pub fn extract_walls(json: &Value) -> Option<Walls> {
    let walls = json.get("Walls")?;
    Some(Walls {
        north: walls.get("north")?.as_bool()?,
        east: walls.get("east")?.as_bool()?,
        south: walls.get("south")?.as_bool()?,
        west: walls.get("west")?.as_bool()?,
    })
}

pub fn extract_action_error(json: &Value) -> Option<&str> {
    json.get("ActionError")?.as_str()
}

pub fn is_ok(json: &Value) -> bool {
    json.get("ActionResult").and_then(Value::as_str) == Some("Ok")
}
