use slp_oracle::oracle::respond_to_hex;
use slp_oracle::slp::{
    decode, encode, GenesisFields, MintFields, SendFields, SlpBody, SlpMessage, TokenId,
    TokenType,
};

use crate::common::scripts::{genesis_script, mint_script, send_script, token_id};

fn messages() -> Vec<SlpMessage> {
    vec![
        SlpMessage {
            token_type: TokenType::Fungible,
            body: SlpBody::Genesis(GenesisFields {
                ticker: b"SPICE".to_vec(),
                name: b"Spice".to_vec(),
                document_uri: b"https://example.com/spice".to_vec(),
                document_hash: vec![0x4f; 32],
                decimals: 8,
                mint_baton_vout: None,
                initial_quantity: 1_000_000_000_000_000,
            }),
        },
        SlpMessage {
            token_type: TokenType::Nft1Group,
            body: SlpBody::Genesis(GenesisFields {
                ticker: Vec::new(),
                // Long enough to need OP_PUSHDATA1
                name: vec![b'n'; 200],
                document_uri: Vec::new(),
                document_hash: Vec::new(),
                decimals: 0,
                mint_baton_vout: Some(2),
                initial_quantity: u64::MAX,
            }),
        },
        SlpMessage {
            token_type: TokenType::Nft1Child,
            body: SlpBody::Genesis(GenesisFields {
                ticker: b"NFT".to_vec(),
                name: b"child".to_vec(),
                document_uri: Vec::new(),
                document_hash: Vec::new(),
                decimals: 0,
                mint_baton_vout: None,
                initial_quantity: 1,
            }),
        },
        SlpMessage {
            token_type: TokenType::Fungible,
            body: SlpBody::Mint(MintFields {
                token_id: TokenId(token_id(0x01)),
                mint_baton_vout: Some(255),
                additional_quantity: 0,
            }),
        },
        SlpMessage {
            token_type: TokenType::Nft1Group,
            body: SlpBody::Mint(MintFields {
                token_id: TokenId(token_id(0x02)),
                mint_baton_vout: None,
                additional_quantity: 42,
            }),
        },
        SlpMessage {
            token_type: TokenType::Fungible,
            body: SlpBody::Send(SendFields {
                token_id: TokenId(token_id(0x03)),
                output_quantities: vec![0],
            }),
        },
        SlpMessage {
            token_type: TokenType::Nft1Child,
            body: SlpBody::Send(SendFields {
                token_id: TokenId(token_id(0x04)),
                output_quantities: (1..=19).collect(),
            }),
        },
    ]
}

#[test]
fn test_decode_inverts_encode() {
    for message in messages() {
        let script = encode(&message);
        assert_eq!(
            decode(&script),
            Ok(message),
            "script {}",
            hex::encode(&script)
        );
    }
}

#[test]
fn test_encode_reproduces_canonical_scripts() {
    let scripts = [
        genesis_script(8, None, 10_000_000_000_000_000),
        genesis_script(0, Some(2), 1),
        mint_script(Some(3), 500),
        mint_script(None, 1),
        send_script(&[1, 2, 3]),
    ];

    for script in scripts {
        let message = decode(&script).unwrap();
        assert_eq!(encode(&message), script);
    }
}

#[test]
fn test_oracle_agrees_with_decoder_on_encoded_messages() {
    for message in messages() {
        let response = respond_to_hex(&hex::encode(encode(&message)));
        assert!(response.success, "{:?}", message.transaction_type());
        assert_eq!(
            serde_json::to_value(&response).unwrap()["data"]["transactionType"],
            serde_json::json!(message.transaction_type().as_str())
        );
    }
}
