/// One page of the letter. `text` is an HTML fragment.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LetterPage {
    /// 1-based number shown in the page counter.
    pub number: u32,
    pub text: &'static str,
}

pub static LETTER_PAGES: [LetterPage; 7] = [
    LetterPage {
        number: 1,
        text: "Thân gửi cô giáo của anh. Lúc anh viết những dòng này chắc là em đã ngủ rồi. Đầu tiên anh muốn nói về mối quan hệ của tụi mình, nó được bắt đầu từ dating app. Như anh với em từng chia sẻ thì nó có khá là nhiều định kiến đối với nhiều người.",
    },
    LetterPage {
        number: 2,
        text: "Nhưng mà anh nghĩ, ông trời sắp đặt sự gặp gỡ nào thì cũng đều có nguyên do của nó. Ấn tượng khi date buổi đầu tiên bằng việc work và study với em nó thực sự rất là vui luôn á. Một cô bé xinh, dễ thương, hoà đồng và siêu siêu giỏi luôn.",
    },
    LetterPage {
        number: 3,
        text: "Anh bị hút hồn ngay từ lần gặp đầu tiên, nhưng mà anh lại suy nghĩ là chắc mình không có \"cửa\" với em đâu, lý do là gia cảnh anh cũng không phải khá giả gì, so với em thì có hơi bị chênh lệch á, nên là anh sợ mình sẽ bị \"trèo cao té đau\".",
    },
    LetterPage {
        number: 4,
        text: "Nhưng mà càng ngày, khi mà tiếp xúc với em nhiều hơn, thì trong anh lại có suy nghĩ là \"À, mình muốn tìm hiểu về cô bé này nhiều hơn, muốn biết thêm về tính cách, muốn gì, thích gì, ..., đặc biệt là liệu cô bé này có thích anh hay không\".",
    },
    LetterPage {
        number: 5,
        text: "Em cho anh cảm giác thoải mái, sự an toàn với những video em gửi về địa điểm em đang ở. Cho anh cảm giác cảm giác muốn được gặp em để \"dô tri\" cùng nhau, ... Trên hết là cảm giác muốn được đồng hành cùng em trên đường (đường đời) càng lâu càng tốt.",
    },
    LetterPage {
        number: 6,
        text: "Anh chấp nhận té đau cũng được nhưng mà nếu bỏ lỡ em thì thật sự rất là hối hận. Anh muốn dùng tất cả sự chân thành để yêu em, là điều anh duy nhất có thể làm được cho em ở thời điểm hiện tại, khi mà anh vẫn còn đang bấp bênh.",
    },
    LetterPage {
        number: 7,
        text: "Qua những dòng này anh muốn nói là anh thật sự rất yêu cô giáo. Anh sẽ cố gắng để cô giáo không phải chờ anh quá lâu đâu. Cùng nhau thật vui vẻ và hạnh phúc ở hiện tại cũng như tương lai nhé. Anh yêu em<i class=\"icon_heart fa-solid fa-heart\" style=\"font-size: 20px; color: #ae0001\"></i>.",
    },
];

#[inline]
pub fn page_count() -> usize {
    LETTER_PAGES.len()
}
