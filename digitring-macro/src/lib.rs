use proc_macro::TokenStream;
use quote::{format_ident, quote};
use syn::{
    parse::{self, Parse},
    parse_macro_input,
    punctuated::Punctuated,
    Ident, LitInt, Token,
};

struct RingInput {
    radix: LitInt,
    digits: Punctuated<LitInt, Token![,]>,
}

impl Parse for RingInput {
    fn parse(input: parse::ParseStream) -> syn::Result<Self> {
        let radix = input.parse()?;
        let _semi: Token![;] = input.parse()?;
        let digits = Punctuated::parse_terminated(input)?;

        Ok(Self { radix, digits })
    }
}

/// Called like ring!(16; 1, 0xA, 3), where the first number is the radix and the rest are
/// the digits, most significant first. The radix must be 2, 8, 10 or 16 and every digit
/// must be below it, anything else fails to compile
#[proc_macro]
pub fn ring(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as RingInput);

    match expand_ring(input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}

fn expand_ring(RingInput { radix, digits }: RingInput) -> syn::Result<proc_macro2::TokenStream> {
    let number: u32 = radix.base10_parse()?;
    let variant = radix_variant(number)
        .map(|name| format_ident!("{}", name))
        .ok_or_else(|| syn::Error::new(radix.span(), format!("unsupported radix {}", number)))?;

    let digits = digits
        .iter()
        .map(|lit| {
            let digit: u32 = lit.base10_parse()?;

            check_digit(digit, number)
                .ok_or_else(|| {
                    syn::Error::new(
                        lit.span(),
                        format!("digit {} is out of range for radix {}", digit, number),
                    )
                })
        })
        .collect::<syn::Result<Vec<u8>>>()?;

    Ok(generate_ring(&variant, &digits))
}

fn generate_ring(variant: &Ident, digits: &[u8]) -> proc_macro2::TokenStream {
    quote! {
        ::digitring::DigitRing::__from_validated_unchecked(
            ::digitring::Radix::#variant,
            &[#(#digits),*],
        )
    }
}

fn radix_variant(number: u32) -> Option<&'static str> {
    match number {
        2 => Some("Binary"),
        8 => Some("Octal"),
        10 => Some("Decimal"),
        16 => Some("Hexadecimal"),
        _ => None,
    }
}

fn check_digit(digit: u32, radix: u32) -> Option<u8> {
    if digit < radix {
        u8::try_from(digit).ok()
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! expand {
        ($($tt:tt)*) => {
            expand_ring(syn::parse_str::<RingInput>(stringify!($($tt)*)).unwrap())
        };
    }

    #[test]
    fn radix_variants() {
        assert_eq!(radix_variant(2), Some("Binary"));
        assert_eq!(radix_variant(8), Some("Octal"));
        assert_eq!(radix_variant(10), Some("Decimal"));
        assert_eq!(radix_variant(16), Some("Hexadecimal"));

        for n in [0, 1, 3, 7, 9, 12, 32, 36] {
            assert_eq!(radix_variant(n), None);
        }
    }

    #[test]
    fn digit_bounds() {
        assert_eq!(check_digit(0, 2), Some(0));
        assert_eq!(check_digit(1, 2), Some(1));
        assert_eq!(check_digit(2, 2), None);
        assert_eq!(check_digit(15, 16), Some(15));
        assert_eq!(check_digit(300, 16), None);
    }

    #[test]
    fn expansion() {
        let tokens = expand!(16; 1, 0xA, 3).unwrap().to_string();

        assert!(tokens.contains("Hexadecimal"));
        assert!(tokens.contains("__from_validated_unchecked"));
        assert!(tokens.contains("10u8"));

        assert!(expand!(2;).is_ok());
        assert!(expand!(10; 9, 0,).is_ok());
    }

    #[test]
    fn expansion_errors() {
        assert!(expand!(12; 1).is_err());
        assert!(expand!(8; 1, 8).is_err());
        assert!(expand!(2; 1, 0, 256).is_err());
    }
}
