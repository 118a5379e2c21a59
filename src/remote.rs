//! Simulateur distant : client (`RemoteApi`) et serveur (`serve`) du protocole JSON.

use std::io::{self, Read, Write};

use log::{debug, info, warn};
use serde_json::Value;

use crate::api::MouseApi;
use crate::direction::Direction;
use crate::error::{MouseError, Result};
use crate::json_utils::{self, Request, CANNOT_PASS_THROUGH_WALL};
use crate::network;
use crate::player::Player;
use crate::walls::Walls;

/// `MouseApi` relayée vers un simulateur via un flux (en pratique un `TcpStream`).
///
/// Le client suit la pose du robot à partir des commandes acceptées, pour pouvoir
/// traduire un refus `CannotPassThroughWall` en `MouseError::BlockedMove`.
pub struct RemoteApi<S: Read + Write> {
    stream: S,
    pose: Player,
}

impl<S: Read + Write> RemoteApi<S> {
    pub fn new(stream: S) -> Self {
        Self {
            stream,
            pose: Player::default(),
        }
    }

    fn request(&mut self, request: Request) -> Result<Value> {
        network::send_message(&mut self.stream, &request.to_json().to_string())?;
        let msg = network::receive_message(&mut self.stream)?;
        let response = json_utils::parse_json(&msg)?;

        match json_utils::extract_action_error(&response) {
            Some(CANNOT_PASS_THROUGH_WALL) => Err(MouseError::BlockedMove {
                x: self.pose.x,
                y: self.pose.y,
                direction: self.pose.direction,
            }),
            Some(reason) => Err(MouseError::SensorFailure(format!(
                "simulator refused {:?}: {}",
                request, reason
            ))),
            None => Ok(response),
        }
    }

    fn action(&mut self, request: Request) -> Result<()> {
        let response = self.request(request)?;
        if json_utils::is_ok(&response) {
            Ok(())
        } else {
            Err(MouseError::Protocol(format!(
                "unexpected answer to {:?}: {}",
                request, response
            )))
        }
    }
}

impl<S: Read + Write> MouseApi for RemoteApi<S> {
    fn sense_walls(&mut self, x: i32, y: i32) -> Result<Walls> {
        // la souris interroge toujours la cellule où se trouve le robot
        self.pose.x = x;
        self.pose.y = y;
        let response = self.request(Request::SenseWalls { x, y })?;
        json_utils::extract_walls(&response).ok_or_else(|| {
            MouseError::Protocol(format!("expected walls for ({}, {}): {}", x, y, response))
        })
    }

    fn move_forward(&mut self) -> Result<()> {
        self.action(Request::MoveForward)?;
        self.pose.step_forward();
        Ok(())
    }

    fn turn_left(&mut self) -> Result<()> {
        self.action(Request::TurnLeft)?;
        self.pose.turn_left();
        Ok(())
    }

    fn turn_right(&mut self) -> Result<()> {
        self.action(Request::TurnRight)?;
        self.pose.turn_right();
        Ok(())
    }

    fn set_wall(&mut self, x: i32, y: i32, side: Direction) -> Result<()> {
        self.action(Request::SetWall { x, y, side })
    }
}

/// Sert un client jusqu'à ce qu'il ferme la connexion.
/// Retourne le nombre de requêtes traitées.
pub fn serve<S, A>(stream: &mut S, api: &mut A) -> Result<usize>
where
    S: Read + Write,
    A: MouseApi + ?Sized,
{
    let mut handled = 0;
    loop {
        let msg = match network::receive_message(stream) {
            Ok(msg) => msg,
            Err(e) if e.kind() == io::ErrorKind::UnexpectedEof => {
                info!("client disconnected after {} requests", handled);
                return Ok(handled);
            }
            Err(e) => return Err(e.into()),
        };

        let response = match json_utils::parse_json(&msg)
            .ok()
            .as_ref()
            .and_then(Request::from_json)
        {
            Some(request) => {
                debug!("request: {:?}", request);
                dispatch(api, request)
            }
            None => {
                warn!("invalid request: {}", msg);
                json_utils::error_response("InvalidRequest")
            }
        };
        network::send_message(stream, &response.to_string())?;
        handled += 1;
    }
}

fn dispatch<A: MouseApi + ?Sized>(api: &mut A, request: Request) -> Value {
    let result = match request {
        Request::SenseWalls { x, y } => api
            .sense_walls(x, y)
            .map(|walls| json_utils::walls_response(&walls)),
        Request::MoveForward => api.move_forward().map(|_| json_utils::ok_response()),
        Request::TurnLeft => api.turn_left().map(|_| json_utils::ok_response()),
        Request::TurnRight => api.turn_right().map(|_| json_utils::ok_response()),
        Request::SetWall { x, y, side } => {
            api.set_wall(x, y, side).map(|_| json_utils::ok_response())
        }
    };

    match result {
        Ok(response) => response,
        Err(MouseError::BlockedMove { .. }) => json_utils::error_response(CANNOT_PASS_THROUGH_WALL),
        Err(e) => {
            warn!("{:?} failed: {}", request, e);
            json_utils::error_response(&e.to_string())
        }
    }
}
