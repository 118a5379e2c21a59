use byteorder::{LittleEndian, ReadBytesExt, WriteBytesExt};
use std::io::{self, Read, Write};
use std::net::TcpStream;

/// Taille maximale acceptée pour un message reçu, en octets.
pub const MAX_MESSAGE_SIZE: u32 = 64 * 1024;

/// Envoie un message : taille sur 4 octets (little endian) puis le texte JSON.
pub fn send_message<W: Write>(stream: &mut W, message: &str) -> io::Result<()> {
    let message_bytes = message.as_bytes();
    let size = message_bytes.len() as u32;
    // en-tête et corps en une seule écriture
    let mut frame = Vec::with_capacity(4 + message_bytes.len());
    frame.write_u32::<LittleEndian>(size)?;
    frame.extend_from_slice(message_bytes);
    stream.write_all(&frame)?;
    stream.flush()
}

/// Reçoit un message complet.
///
/// Une taille annoncée au-delà de `MAX_MESSAGE_SIZE` est refusée avant toute allocation.
pub fn receive_message<R: Read>(stream: &mut R) -> io::Result<String> {
    let size = stream.read_u32::<LittleEndian>()?;
    if size > MAX_MESSAGE_SIZE {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Message too large: {} bytes", size),
        ));
    }
    let mut buffer = vec![0; size as usize];
    stream.read_exact(&mut buffer)?;
    String::from_utf8(buffer).map_err(|e| {
        io::Error::new(io::ErrorKind::InvalidData, format!("Invalid data: {}", e))
    })
}

/// Connecte le client au simulateur
pub fn connect_to_server(address: &str) -> io::Result<TcpStream> {
    TcpStream::connect(address)
}
