use std::io::{Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use pdfscrub::Category;

pub const SAMPLE_ID: &str =
    "/ID[<0123456789abcdef0123456789abcdef><FEDCBA9876543210FEDCBA9876543210>]";
pub const ZERO_ID: &str =
    "/ID[<00000000000000000000000000000000><00000000000000000000000000000000>]";

pub struct TestFixtures;

impl TestFixtures {
    /// Minimal PDF with the given Info dictionary body, extra objects and
    /// trailer additions
    pub fn pdf(info: &[u8], extra_objects: &[u8], trailer_extra: &[u8]) -> Vec<u8> {
        let mut pdf = b"%PDF-1.4
1 0 obj
<<
/Type /Catalog
/Pages 2 0 R
>>
endobj

2 0 obj
<<
/Type /Pages
/Kids [3 0 R]
/Count 1
>>
endobj

3 0 obj
<<
/Type /Page
/Parent 2 0 R
/MediaBox [0 0 612 792]
>>
endobj

4 0 obj
<<"
        .to_vec();
        pdf.extend_from_slice(info);
        pdf.extend_from_slice(b">>\nendobj\n\n");
        pdf.extend_from_slice(extra_objects);
        pdf.extend_from_slice(
            b"xref
0 5
0000000000 65535 f 
0000000010 00000 n 
0000000053 00000 n 
0000000125 00000 n 
0000000200 00000 n 
trailer
<<
/Size 5
/Root 1 0 R
/Info 4 0 R",
        );
        pdf.extend_from_slice(trailer_extra);
        pdf.extend_from_slice(b"\n>>\nstartxref\n300\n%%EOF\n");
        pdf
    }

    /// PDF carrying no metadata at all
    pub fn bare_pdf() -> Vec<u8> {
        Self::pdf(b"", b"", b"")
    }

    /// Flate-compressed stream object
    pub fn compressed_stream(number: u32, content: &[u8]) -> Vec<u8> {
        let payload = Self::deflate(content);
        let mut obj = format!(
            "{} 0 obj\n<</Length {}/Filter/FlateDecode>>\nstream\r\n",
            number,
            payload.len()
        )
        .into_bytes();
        obj.extend_from_slice(&payload);
        obj.extend_from_slice(b"\r\nendstream\nendobj\n\n");
        obj
    }

    /// Uncompressed XMP metadata stream object
    pub fn xmp_stream(number: u32) -> Vec<u8> {
        let xmp = r#"<?xpacket begin="" id="W5M0MpCehiHzreSzNTczkc9d"?>
<x:xmpmeta xmlns:x="adobe:ns:meta/">
<rdf:RDF xmlns:rdf="http://www.w3.org/1999/02/22-rdf-syntax-ns#">
<rdf:Description rdf:about="">
<xmp:CreatorTool>Writer</xmp:CreatorTool>
<xmp:CreateDate>2023-01-01T12:00:00+02:00</xmp:CreateDate>
<xmp:ModifyDate>2023-01-02T12:00:00+02:00</xmp:ModifyDate>
<pdf:Producer>LibreOffice 7.5</pdf:Producer>
<dc:creator><rdf:Seq><rdf:li>John Doe</rdf:li></rdf:Seq></dc:creator>
<dc:title><rdf:Alt><rdf:li xml:lang="x-default">Secret Plan</rdf:li></rdf:Alt></dc:title>
<xmpMM:DocumentID>uuid:1b2c3d4e-1111-2222-3333-444455556666</xmpMM:DocumentID>
<xmpMM:InstanceID>uuid:9f8e7d6c-aaaa-bbbb-cccc-ddddeeeeffff</xmpMM:InstanceID>
</rdf:Description>
</rdf:RDF>
</x:xmpmeta>
<?xpacket end="w"?>"#;
        let mut obj = format!(
            "{} 0 obj\n<</Type/Metadata/Subtype/XML/Length {}>>\nstream\n",
            number,
            xmp.len()
        )
        .into_bytes();
        obj.extend_from_slice(xmp.as_bytes());
        obj.extend_from_slice(b"\nendstream\nendobj\n\n");
        obj
    }

    /// The end-to-end document: author, dated creation with offset, and a
    /// compressed stream holding two Hebrew language tags
    pub fn end_to_end_pdf() -> Vec<u8> {
        Self::pdf(
            b"/Author(John Doe)/CreationDate(D:20230101120000+02'00')",
            &Self::compressed_stream(5, b"/Lang(he)/Lang(he)"),
            b"",
        )
    }

    /// Document exercising every category
    pub fn full_pdf() -> Vec<u8> {
        let mut objects = Self::compressed_stream(5, b"<</Lang(he)>> BT (Shalom) Tj ET /Lang(he)");
        objects.extend(Self::xmp_stream(6));
        objects.extend_from_slice(b"7 0 obj\n<</Type/StructElem/Lang(he)>>\nendobj\n\n");

        Self::pdf(
            b"/Author(John Doe)/Creator<FEFF00570072006900740065007200>/Producer(LibreOffice 7.5)\
/Title(Secret Plan)/Subject(Budget \\(draft\\))\
/CreationDate(D:20230101120000+02'00')/ModDate(D:20230102120000-05'00')",
            &objects,
            format!("\n{}", SAMPLE_ID).as_bytes(),
        )
    }

    /// Document with exactly one non-empty occurrence of `category`
    pub fn single_occurrence(category: Category) -> Vec<u8> {
        match category {
            Category::Author => Self::pdf(b"/Author(John Doe)", b"", b""),
            Category::Creator => Self::pdf(b"/Creator(Writer)", b"", b""),
            Category::Producer => Self::pdf(b"/Producer<4C69627265>", b"", b""),
            Category::Title => Self::pdf(b"/Title(Secret Plan)", b"", b""),
            Category::Subject => Self::pdf(b"/Subject(Budget)", b"", b""),
            Category::Timestamps => Self::pdf(b"/CreationDate(D:20230101120000Z)", b"", b""),
            Category::Timezone => Self::pdf(b"/ModDate(D:20230615120000+02'00')", b"", b""),
            Category::LangTags => {
                Self::pdf(b"", b"5 0 obj\n<</Type/StructElem/Lang(he)>>\nendobj\n\n", b"")
            }
            Category::DocId => Self::pdf(b"", b"", format!("\n{}", SAMPLE_ID).as_bytes()),
            Category::Xmp => Self::pdf(b"", &Self::xmp_stream(5), b""),
        }
    }

    /// Bytes that must appear after sanitizing `single_occurrence(category)`
    pub fn expected_value(category: Category) -> &'static [u8] {
        match category {
            Category::Author => b"/Author()",
            Category::Creator => b"/Creator()",
            Category::Producer => b"/Producer<>",
            Category::Title => b"/Title()",
            Category::Subject => b"/Subject()",
            Category::Timestamps => b"/CreationDate(D:19700101000000Z)",
            Category::Timezone => b"/ModDate(D:20230615120000Z)",
            Category::LangTags => b"/Lang(en)",
            Category::DocId => ZERO_ID.as_bytes(),
            Category::Xmp => b"<xmp:CreatorTool></xmp:CreatorTool>",
        }
    }

    pub fn deflate(content: &[u8]) -> Vec<u8> {
        let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(content).unwrap();
        encoder.finish().unwrap()
    }

    pub fn inflate(payload: &[u8]) -> Vec<u8> {
        let mut out = Vec::new();
        ZlibDecoder::new(payload).read_to_end(&mut out).unwrap();
        out
    }

    /// Decoded content of every FlateDecode stream in `pdf`, in order
    pub fn decoded_streams(pdf: &[u8]) -> Vec<Vec<u8>> {
        let mut streams = Vec::new();
        let mut rest = pdf;
        while let Some(start) = find(rest, b"/FlateDecode>>\nstream\r\n") {
            let body = &rest[start + b"/FlateDecode>>\nstream\r\n".len()..];
            let end = find(body, b"\r\nendstream").expect("unterminated stream");
            streams.push(Self::inflate(&body[..end]));
            rest = &body[end..];
        }
        streams
    }
}

pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack.windows(needle.len()).position(|w| w == needle)
}

pub fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    find(haystack, needle).is_some()
}
