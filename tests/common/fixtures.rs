//! JSON fixtures shaped like the backend's responses.

use serde_json::{json, Value};

pub fn bulbasaur() -> Value {
    json!({
        "id": 1,
        "pokemonNumber": 1,
        "name": "Bulbasaur",
        "description": "A strange seed was planted on its back at birth.",
        "heightM": 0.7,
        "weightKg": 6.9,
        "baseExperience": 64,
        "types": ["Grass", "Poison"],
        "abilities": ["Overgrow", "Chlorophyll"],
        "hp": 45,
        "attack": 49,
        "defense": 49,
        "specialAttack": 65,
        "specialDefense": 65,
        "speed": 45,
        "spriteUrl": null,
        "userId": 1,
        "createdAt": "2024-03-01T10:15:30",
        "updatedAt": null
    })
}

pub fn pokemon(id: i64, name: &str, types: &[&str]) -> Value {
    json!({
        "id": id,
        "pokemonNumber": id,
        "name": name,
        "types": types,
        "hp": 50, "attack": 50, "defense": 50,
        "specialAttack": 50, "specialDefense": 50, "speed": 50
    })
}

pub fn page(content: Vec<Value>, number: u32, total_pages: u32, total_elements: u64) -> Value {
    json!({
        "content": content,
        "totalPages": total_pages,
        "totalElements": total_elements,
        "number": number,
        "size": 20,
        "first": number == 0,
        "last": number + 1 >= total_pages
    })
}

pub fn ash() -> Value {
    json!({
        "id": 1,
        "username": "ash",
        "email": "ash@pallet.town",
        "firstName": "Ash",
        "lastName": "Ketchum",
        "role": "USER",
        "isActive": true
    })
}

pub fn auth_response(token: &str) -> Value {
    json!({ "token": token, "type": "Bearer", "user": ash() })
}

pub fn error_body(status: u16, error: &str, message: &str) -> Value {
    json!({ "status": status, "error": error, "message": message })
}
