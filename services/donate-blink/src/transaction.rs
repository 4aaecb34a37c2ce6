use anchor_lang::prelude::Pubkey;
use anchor_lang::solana_program::{hash::Hash, instruction::Instruction, message::Message};
use base64::{engine::general_purpose::STANDARD, Engine};

pub const SIGNATURE_LEN: usize = 64;

/// A legacy transaction waiting for the wallet to sign it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnsignedTransaction {
    pub message: Message,
}

impl UnsignedTransaction {
    pub fn new(instructions: &[Instruction], fee_payer: &Pubkey, blockhash: Hash) -> Self {
        Self {
            message: Message::new_with_blockhash(instructions, Some(fee_payer), &blockhash),
        }
    }

    pub fn fee_payer(&self) -> &Pubkey {
        &self.message.account_keys[0]
    }

    pub fn num_required_signatures(&self) -> usize {
        usize::from(self.message.header.num_required_signatures)
    }

    /// Wire format: compact-u16 signature count, zeroed signature slots, message.
    pub fn serialize(&self) -> Vec<u8> {
        let signatures = self.num_required_signatures();
        let message = self.message.serialize();

        let mut bytes = Vec::with_capacity(3 + signatures * SIGNATURE_LEN + message.len());
        encode_compact_u16(signatures as u16, &mut bytes);
        bytes.resize(bytes.len() + signatures * SIGNATURE_LEN, 0);
        bytes.extend_from_slice(&message);
        bytes
    }

    pub fn to_base64(&self) -> String {
        STANDARD.encode(self.serialize())
    }
}

pub fn encode_compact_u16(mut value: u16, out: &mut Vec<u8>) {
    loop {
        let mut byte = (value & 0x7f) as u8;
        value >>= 7;
        if value == 0 {
            out.push(byte);
            return;
        }
        byte |= 0x80;
        out.push(byte);
    }
}
