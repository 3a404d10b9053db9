use crate::{decoding::constants::TRANSACTION_SIZE_BYTES_SIZE, from_be_bytes_slice_and_advance_buf};

use alloy_consensus::{Transaction as _, TxEnvelope};
use alloy_eips::eip2718::Decodable2718;
use alloy_primitives::{bytes::Buf, Bytes, U256};
use alloy_rlp::Header;
use ovm_primitives::{DecodedSequencerTransaction, DecodedSignature};

/// A size prefixed sequencer transaction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequencerTransaction(pub Bytes);

impl SequencerTransaction {
    /// Tries to read from the input buffer into the [`SequencerTransaction`]. Returns the amount of
    /// bytes expected by the size prefix as error if the buffer doesn't contain them.
    pub(crate) fn try_from_buf(buf: &mut &[u8]) -> Result<Self, usize> {
        if buf.len() < TRANSACTION_SIZE_BYTES_SIZE {
            return Err(TRANSACTION_SIZE_BYTES_SIZE)
        }

        // peek the size in order to leave the buffer untouched on error.
        let size =
            from_be_bytes_slice_and_advance_buf!(u32, TRANSACTION_SIZE_BYTES_SIZE, &mut &buf[..])
                as usize;
        if buf.remaining() < TRANSACTION_SIZE_BYTES_SIZE + size {
            return Err(TRANSACTION_SIZE_BYTES_SIZE + size)
        }
        buf.advance(TRANSACTION_SIZE_BYTES_SIZE);

        // copy the transaction bytes out of the calldata and advance the buffer.
        let tx = Self(Bytes::copy_from_slice(&buf[..size]));
        buf.advance(size);
        Ok(tx)
    }

    /// Tries to decode the transaction as a signed legacy transaction. Returns [`None`] if the
    /// payload isn't exactly one RLP encoded legacy transaction.
    pub fn decode(&self) -> Option<DecodedSequencerTransaction> {
        let buf = &mut &self.0[..];

        // legacy transactions are RLP lists, typed transactions start with their type.
        let header = Header::decode(&mut &**buf).ok()?;
        if !header.list || header.length_with_payload() != buf.len() {
            return None
        }

        let TxEnvelope::Legacy(signed) = TxEnvelope::decode_2718(buf).ok()? else { return None };
        let tx = signed.tx();
        let signature = signed.signature();

        Some(DecodedSequencerTransaction {
            nonce: tx.nonce(),
            gas_price: U256::from(tx.gas_price),
            gas_limit: tx.gas_limit(),
            target: tx.to(),
            value: tx.value(),
            data: tx.input().clone(),
            origin: signed.recover_signer().ok(),
            sig: DecodedSignature {
                v: signature.v() as u8,
                r: signature.r(),
                s: signature.s(),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use alloy_primitives::{address, hex, uint};

    /// The signed transaction from the EIP-155 specification.
    const EIP155_TRANSACTION: [u8; 110] = hex!("f86c098504a817c800825208943535353535353535353535353535353535353535880de0b6b3a76400008025a028ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276a067cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83");

    #[test]
    fn test_should_read_size_prefixed_transaction() {
        let raw = hex!("000003aabbccdd");
        let buf = &mut &raw[..];

        let tx = SequencerTransaction::try_from_buf(buf).expect("enough bytes");

        assert_eq!(&tx.0[..], &hex!("aabbcc"));
        assert_eq!(*buf, &[0xdd][..]);
    }

    #[test]
    fn test_should_read_empty_transaction() {
        let raw = hex!("000000");
        let buf = &mut &raw[..];

        let tx = SequencerTransaction::try_from_buf(buf).expect("enough bytes");

        assert!(tx.0.is_empty());
        assert!(buf.is_empty());
    }

    #[test]
    fn test_should_not_read_truncated_transaction() {
        let raw = hex!("000004aabbcc");
        let buf = &mut &raw[..];

        assert_eq!(SequencerTransaction::try_from_buf(buf), Err(7));
        // the buffer is left untouched.
        assert_eq!(buf.len(), 6);

        assert_eq!(SequencerTransaction::try_from_buf(&mut &hex!("0000")[..]), Err(3));
    }

    #[test]
    fn test_should_decode_legacy_transaction() {
        let tx = SequencerTransaction(Bytes::from_static(&EIP155_TRANSACTION));
        let decoded = tx.decode().expect("valid legacy transaction");

        assert_eq!(decoded.nonce, 9);
        assert_eq!(decoded.gas_price, U256::from(20_000_000_000u64));
        assert_eq!(decoded.gas_limit, 21000);
        assert_eq!(decoded.target, Some(address!("3535353535353535353535353535353535353535")));
        assert_eq!(decoded.value, U256::from(1_000_000_000_000_000_000u64));
        assert!(decoded.data.is_empty());
        assert_eq!(decoded.origin, Some(address!("9d8A62f656a8d1615C1294fd71e9CFb3E4855A4F")));
        assert_eq!(
            decoded.sig,
            DecodedSignature {
                v: 0,
                r: uint!(0x28ef61340bd939bc2195fe537567866003e1a15d3c71ff63e1590620aa636276_U256),
                s: uint!(0x67cbe9d8997f761aecb703304b3800ccf555c9f3dc64214b297fb1966a3b6d83_U256),
            }
        );
    }

    #[test]
    fn test_should_not_decode_invalid_transaction() {
        for raw in [&hex!("0102")[..], &[][..], &EIP155_TRANSACTION[..100], &hex!("02c0")[..]] {
            assert!(SequencerTransaction(Bytes::copy_from_slice(raw)).decode().is_none());
        }

        // trailing bytes after the transaction.
        let mut raw = EIP155_TRANSACTION.to_vec();
        raw.push(0x00);
        assert!(SequencerTransaction(raw.into()).decode().is_none());
    }
}
